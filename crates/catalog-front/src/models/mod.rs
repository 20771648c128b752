pub mod context;
pub mod state;

pub use catalog_common::{Course, CourseIcon, CourseState, CoverImage, Priority};
pub use context::*;
pub use state::*;
