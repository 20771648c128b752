pub mod catalog;
pub mod error;
pub mod provider;

pub use catalog::*;
pub use error::*;
pub use provider::*;

/// A translatable message, declared next to the component that displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDescriptor {
    pub id: &'static str,
    pub default_message: &'static str,
    pub description: &'static str,
}
