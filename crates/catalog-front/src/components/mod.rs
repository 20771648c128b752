pub mod course_glimpse;
pub mod course_glimpse_list;
pub mod icon;

pub use course_glimpse::*;
pub use course_glimpse_list::*;
pub use icon::*;
