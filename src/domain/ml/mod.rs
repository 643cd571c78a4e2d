// Feature registry shared by training and inference
pub mod feature_registry;
