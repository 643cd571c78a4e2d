use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_regressor::{
    DecisionTreeRegressor, DecisionTreeRegressorParameters,
};

use crate::application::ml::predictor::PropensityModel;
use crate::application::ml::preprocessing::{MedianImputer, OneHotEncoder, StandardScaler};
use crate::domain::customer::CustomerProfile;
use crate::domain::errors::ModelError;
use crate::domain::ml::feature_registry::{NUMERIC_FEATURES, numeric_row};

const MAX_TREE_DEPTH: u16 = 8;

/// Regression tree fit on 0/1 purchase labels. Leaf predictions are the
/// fraction of purchasers in the leaf, which is the class probability.
type PurchaseTree = DecisionTreeRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// End-to-end scoring pipeline: median imputation and standardization of the
/// numeric features, one-hot encoding of the occupation, then a decision
/// tree over the combined feature row.
///
/// A pipeline built via [`ScoringPipeline::skeleton`] has the same shape but
/// no fitted state, and every prediction fails with
/// [`ModelError::NotFitted`].
#[derive(Default, Serialize, Deserialize)]
pub struct ScoringPipeline {
    imputer: MedianImputer,
    scaler: StandardScaler,
    encoder: OneHotEncoder,
    tree: Option<PurchaseTree>,
}

impl ScoringPipeline {
    /// Unfitted pipeline with the production stage layout.
    pub fn skeleton() -> Self {
        Self::default()
    }

    pub fn is_fitted(&self) -> bool {
        self.tree.is_some()
    }

    /// Fit every stage on the given profiles and purchase labels.
    pub fn fit(
        &mut self,
        profiles: &[CustomerProfile],
        purchased: &[bool],
    ) -> Result<(), ModelError> {
        if profiles.is_empty() {
            return Err(ModelError::FitFailed {
                reason: "no training profiles".to_string(),
            });
        }
        if profiles.len() != purchased.len() {
            return Err(ModelError::FitFailed {
                reason: format!(
                    "{} profiles but {} labels",
                    profiles.len(),
                    purchased.len()
                ),
            });
        }

        let numeric: Vec<Vec<f64>> = profiles.iter().map(numeric_row).collect();
        let imputer = MedianImputer::fit(&numeric, NUMERIC_FEATURES.len())?;
        let imputed: Vec<Vec<f64>> = numeric
            .iter()
            .map(|row| imputer.transform(row))
            .collect::<Result<_, _>>()?;
        let scaler = StandardScaler::fit(&imputed, NUMERIC_FEATURES.len())?;

        let labels: Vec<&str> = profiles
            .iter()
            .map(|profile| profile.occupation.as_str())
            .collect();
        let encoder = OneHotEncoder::fit(&labels)?;

        let mut design = Vec::with_capacity(profiles.len());
        for (row, profile) in imputed.iter().zip(profiles) {
            let mut features = scaler.transform(row)?;
            features.extend(encoder.encode(&profile.occupation)?);
            design.push(features);
        }

        let x = DenseMatrix::from_2d_vec(&design).map_err(|e| ModelError::FitFailed {
            reason: format!("matrix creation failed: {e}"),
        })?;
        let y: Vec<f64> = purchased
            .iter()
            .map(|&bought| if bought { 1.0 } else { 0.0 })
            .collect();
        let params = DecisionTreeRegressorParameters::default().with_max_depth(MAX_TREE_DEPTH);
        let tree = PurchaseTree::fit(&x, &y, params).map_err(|e| ModelError::FitFailed {
            reason: format!("tree training failed: {e}"),
        })?;

        self.imputer = imputer;
        self.scaler = scaler;
        self.encoder = encoder;
        self.tree = Some(tree);
        Ok(())
    }

    fn transform(&self, profile: &CustomerProfile) -> Result<Vec<f64>, ModelError> {
        let row = numeric_row(profile);
        let row = self.imputer.transform(&row)?;
        let mut features = self.scaler.transform(&row)?;
        features.extend(self.encoder.encode(&profile.occupation)?);
        Ok(features)
    }
}

impl PropensityModel for ScoringPipeline {
    fn predict_proba(&self, profile: &CustomerProfile) -> Result<f64, ModelError> {
        let tree = self.tree.as_ref().ok_or(ModelError::NotFitted)?;
        let features = self.transform(profile)?;

        let input =
            DenseMatrix::from_2d_vec(&vec![features]).map_err(|e| ModelError::InferenceFailed {
                reason: format!("matrix creation failed: {e}"),
            })?;
        let predictions = tree
            .predict(&input)
            .map_err(|e| ModelError::InferenceFailed {
                reason: format!("prediction failed: {e}"),
            })?;
        let probability = predictions
            .first()
            .copied()
            .ok_or_else(|| ModelError::InferenceFailed {
                reason: "no prediction returned".to_string(),
            })?;
        Ok(probability.clamp(0.0, 1.0))
    }

    fn name(&self) -> &str {
        "Decision Tree Pipeline"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
