pub mod mock;
pub mod model_store;
