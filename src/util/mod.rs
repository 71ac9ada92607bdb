#[cfg(feature = "metadata")]
pub mod fixtures;
