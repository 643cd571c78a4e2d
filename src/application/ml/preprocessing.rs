//! Preprocessing stages applied ahead of the tree model.
//!
//! Each stage serializes with the pipeline so a loaded artifact transforms
//! inference rows exactly as it did at fit time. A stage constructed via
//! `Default` is unfitted and refuses to transform.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ModelError;
use crate::domain::ml::feature_registry::CATEGORICAL_FEATURE;

/// Placeholder category substituted for blank occupation labels.
pub const MISSING_CATEGORY: &str = "missing";

/// Replaces non-finite numeric values with the column median seen at fit time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedianImputer {
    medians: Vec<f64>,
}

impl MedianImputer {
    pub fn fit(rows: &[Vec<f64>], width: usize) -> Result<Self, ModelError> {
        let mut medians = Vec::with_capacity(width);
        for column in 0..width {
            let mut values: Vec<f64> = rows
                .iter()
                .filter_map(|row| row.get(column).copied())
                .filter(|value| value.is_finite())
                .collect();
            if values.is_empty() {
                return Err(ModelError::FitFailed {
                    reason: format!("no finite values in column {column}"),
                });
            }
            values.sort_by(f64::total_cmp);
            medians.push(median_of_sorted(&values));
        }
        Ok(Self { medians })
    }

    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        if self.medians.is_empty() {
            return Err(ModelError::NotFitted);
        }
        if row.len() != self.medians.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.medians.len(),
                actual: row.len(),
            });
        }
        Ok(row
            .iter()
            .zip(&self.medians)
            .map(|(&value, &median)| if value.is_finite() { value } else { median })
            .collect())
    }
}

fn median_of_sorted(values: &[f64]) -> f64 {
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Centers and scales numeric columns to zero mean and unit variance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    pub fn fit(rows: &[Vec<f64>], width: usize) -> Result<Self, ModelError> {
        if rows.is_empty() {
            return Err(ModelError::FitFailed {
                reason: "no rows to fit scaler on".to_string(),
            });
        }
        let count = rows.len() as f64;
        let mut means = Vec::with_capacity(width);
        let mut stds = Vec::with_capacity(width);
        for column in 0..width {
            let mean = rows.iter().map(|row| row[column]).sum::<f64>() / count;
            let variance = rows
                .iter()
                .map(|row| (row[column] - mean).powi(2))
                .sum::<f64>()
                / count;
            means.push(mean);
            stds.push(variance.sqrt());
        }
        Ok(Self { means, stds })
    }

    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        if self.means.is_empty() {
            return Err(ModelError::NotFitted);
        }
        if row.len() != self.means.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.means.len(),
                actual: row.len(),
            });
        }
        Ok(row
            .iter()
            .enumerate()
            .map(|(column, &value)| {
                // Constant columns carry no signal, map them to 0
                if self.stds[column] == 0.0 {
                    0.0
                } else {
                    (value - self.means[column]) / self.stds[column]
                }
            })
            .collect())
    }
}

/// One-hot encodes the occupation label, dropping the first category as the
/// baseline. Blank labels are imputed to [`MISSING_CATEGORY`] before lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    categories: Vec<String>,
}

impl OneHotEncoder {
    pub fn fit(labels: &[&str]) -> Result<Self, ModelError> {
        if labels.is_empty() {
            return Err(ModelError::FitFailed {
                reason: "no labels to fit encoder on".to_string(),
            });
        }
        let mut categories: Vec<String> = labels
            .iter()
            .map(|label| fill_missing(label).to_string())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(Self { categories })
    }

    pub fn encode(&self, label: &str) -> Result<Vec<f64>, ModelError> {
        if self.categories.is_empty() {
            return Err(ModelError::NotFitted);
        }
        let label = fill_missing(label);
        let index = self
            .categories
            .iter()
            .position(|category| category == label)
            .ok_or_else(|| ModelError::UnknownCategory {
                feature: CATEGORICAL_FEATURE,
                value: label.to_string(),
            })?;
        // First category is the dropped baseline column
        let mut columns = vec![0.0; self.width()];
        if index > 0 {
            columns[index - 1] = 1.0;
        }
        Ok(columns)
    }

    /// Number of output columns (category count minus the dropped baseline).
    pub fn width(&self) -> usize {
        self.categories.len().saturating_sub(1)
    }
}

fn fill_missing(label: &str) -> &str {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        MISSING_CATEGORY
    } else {
        trimmed
    }
}
