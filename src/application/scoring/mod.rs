pub mod fallback;
pub mod scorer;
