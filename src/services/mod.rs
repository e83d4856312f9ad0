pub mod optimizer;
pub mod rubric_store;

pub use optimizer::{OptimizerSession, SessionState};
pub use rubric_store::RubricStore;
