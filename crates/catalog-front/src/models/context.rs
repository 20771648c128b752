use serde::{Deserialize, Serialize};

/// The listing surface a glimpse is displayed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlimpseContext {
    #[default]
    Catalog,
    Search,
    Related,
    Organization,
    Category,
    Person,
}

impl GlimpseContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlimpseContext::Catalog => "catalog",
            GlimpseContext::Search => "search",
            GlimpseContext::Related => "related",
            GlimpseContext::Organization => "organization",
            GlimpseContext::Category => "category",
            GlimpseContext::Person => "person",
        }
    }
}
