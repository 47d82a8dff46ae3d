pub mod dataset;
pub mod predict;
pub mod providers;
pub mod recommender;
