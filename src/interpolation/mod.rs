pub mod algorithms;
pub mod config;
pub mod errors;
pub mod functions;
pub mod perturbation;
pub mod report;
pub mod traits;
pub use traits::Evaluator;

pub mod base;
pub mod newton;
pub mod residual;
pub mod spline;

pub mod session;
pub mod view;
