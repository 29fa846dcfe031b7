pub(crate) mod helpers;
pub mod staggered;

pub use staggered::StaggeredSpline;
