use serde::{Deserialize, Serialize};

pub mod priority;

pub use priority::{Priority, PriorityError};

/// Responsive image used as a course cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    pub src: String,
    pub srcset: String,
    pub sizes: String,
}

/// Badge shown on top of a course glimpse, e.g. a certification mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseIcon {
    pub src: String,
    pub srcset: String,
    pub sizes: String,
    pub color: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseState {
    pub call_to_action: Option<String>,
    pub datetime: Option<String>,
    pub priority: Priority,
    pub text: String,
}

/// A course as listed in the catalog.
///
/// Records come from the catalog API already validated; nothing here
/// checks them beyond what the types enforce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub absolute_url: String,
    pub title: String,
    pub code: Option<String>,
    pub organization_highlighted: String,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub cover_image: Option<CoverImage>,
    pub icon: Option<CourseIcon>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub effort: String,
    pub state: CourseState,
}
