pub mod evaluations;
pub mod system;

pub use evaluations::EvaluationService;
pub use system::SystemService;
