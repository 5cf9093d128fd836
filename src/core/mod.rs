pub mod classifier;
pub mod converter;
pub mod pipeline;
pub mod workspace;
