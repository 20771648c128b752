use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

use crate::app::AppProps;
use crate::models::{Course, GlimpseContext};

/// Attribute marking the elements a course listing is rendered into.
pub const MOUNT_ATTRIBUTE: &str = "data-catalog-component";
pub const LIST_COMPONENT: &str = "CourseGlimpseList";
pub const PROPS_ATTRIBUTE: &str = "data-props";

#[derive(Error, Debug)]
pub enum MountError {
    #[error("Element has no data-props attribute")]
    MissingProps,

    #[error("Invalid data-props: {0}")]
    InvalidProps(#[from] serde_json::Error),
}

/// Configuration embedded by the server in a mount element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MountProps {
    #[serde(default)]
    pub context: GlimpseContext,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub locale: Option<String>,
}

impl From<MountProps> for AppProps {
    fn from(props: MountProps) -> Self {
        Self {
            context: props.context,
            courses: Rc::new(props.courses.into_iter().map(Rc::new).collect()),
            locale: props.locale.map(Into::into),
        }
    }
}

pub fn parse_mount_props(json: &str) -> Result<MountProps, MountError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(target_arch = "wasm32")]
fn read_props(element: &web_sys::Element) -> Result<MountProps, MountError> {
    let json = element
        .get_attribute(PROPS_ATTRIBUTE)
        .ok_or(MountError::MissingProps)?;
    parse_mount_props(&json)
}

/// Renders a course listing into every marked element of the page.
/// Elements whose configuration cannot be read are skipped.
#[cfg(target_arch = "wasm32")]
pub fn mount_all() {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document to mount course listings into");
        return;
    };

    let selector = format!("[{}=\"{}\"]", MOUNT_ATTRIBUTE, LIST_COMPONENT);
    let elements = match document.query_selector_all(&selector) {
        Ok(elements) => elements,
        Err(e) => {
            log::error!("Failed to query {}: {:?}", selector, e);
            return;
        }
    };

    log::info!("Mounting {} course listing(s)", elements.length());

    for index in 0..elements.length() {
        let Some(element) = elements
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };

        match read_props(&element) {
            Ok(props) => {
                yew::Renderer::<crate::app::App>::with_root_and_props(element, props.into())
                    .render();
            }
            Err(e) => log::error!("Skipping course listing: {}", e),
        }
    }
}
