pub mod course;

pub use course::{Course, CourseIcon, CourseState, CoverImage, Priority, PriorityError};
