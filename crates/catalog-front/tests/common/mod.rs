#![allow(dead_code)]

use std::rc::Rc;

use catalog_common::{Course, CourseIcon, CourseState, CoverImage, Priority};
use catalog_front::components::{CourseGlimpse, CourseGlimpseList};
use catalog_front::i18n::{Catalog, IntlProvider};
use catalog_front::models::GlimpseContext;
use rstest::fixture;
use yew::prelude::*;
use yew::LocalServerRenderer;

pub async fn render<C>(props: C::Properties) -> Rendered
where
    C: BaseComponent,
{
    let html = tokio::task::LocalSet::new()
        .run_until(async move {
            LocalServerRenderer::<C>::with_props(props)
                .hydratable(false)
                .render()
                .await
        })
        .await;
    Rendered { html }
}

/// Server-rendered markup with a few `tl` based lookups.
pub struct Rendered {
    pub html: String,
}

impl Rendered {
    fn with_dom<T>(&self, f: impl FnOnce(&tl::VDom) -> T) -> T {
        let dom = tl::parse(&self.html, tl::ParserOptions::default()).expect("rendered html parses");
        f(&dom)
    }

    pub fn count(&self, selector: &'static str) -> usize {
        self.with_dom(|dom| {
            dom.query_selector(selector)
                .expect("valid selector")
                .count()
        })
    }

    pub fn texts(&self, selector: &'static str) -> Vec<String> {
        self.with_dom(|dom| {
            let parser = dom.parser();
            dom.query_selector(selector)
                .expect("valid selector")
                .filter_map(|handle| handle.get(parser))
                .map(|node| node.inner_text(parser).trim().to_string())
                .collect()
        })
    }

    pub fn text(&self, selector: &'static str) -> String {
        self.texts(selector)
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("no element matches {}", selector))
    }

    /// Attribute of the first element matching `selector`. Present but
    /// valueless attributes read as an empty string.
    pub fn attr(&self, selector: &'static str, name: &'static str) -> Option<String> {
        self.with_dom(|dom| {
            let parser = dom.parser();
            let tag = dom
                .query_selector(selector)
                .expect("valid selector")
                .filter_map(|handle| handle.get(parser))
                .find_map(|node| node.as_tag())?;
            tag.attributes()
                .get(name)
                .map(|value| value.map(|v| v.as_utf8_str().to_string()).unwrap_or_default())
        })
    }

    pub fn attrs(&self, selector: &'static str, name: &'static str) -> Vec<String> {
        self.with_dom(|dom| {
            let parser = dom.parser();
            dom.query_selector(selector)
                .expect("valid selector")
                .filter_map(|handle| handle.get(parser))
                .filter_map(|node| node.as_tag())
                .filter_map(|tag| tag.attributes().get(name).flatten())
                .map(|value| value.as_utf8_str().to_string())
                .collect()
        })
    }

    /// Number of `inner` elements below the first `outer` element.
    pub fn count_within(&self, outer: &'static str, inner: &'static str) -> usize {
        self.with_dom(|dom| {
            let parser = dom.parser();
            dom.query_selector(outer)
                .expect("valid selector")
                .filter_map(|handle| handle.get(parser))
                .find_map(|node| node.as_tag())
                .and_then(|tag| tag.query_selector(parser, inner))
                .map(|matches| matches.count())
                .unwrap_or(0)
        })
    }
}

pub fn course_with(id: &str, title: &str) -> Course {
    Course {
        id: id.to_string(),
        absolute_url: format!("/courses/{}", id),
        title: title.to_string(),
        code: Some(String::new()),
        organization_highlighted: "OpenU".to_string(),
        organizations: vec!["1".to_string()],
        categories: vec![],
        cover_image: None,
        icon: None,
        duration: "4 weeks".to_string(),
        effort: "2 hours".to_string(),
        state: CourseState {
            call_to_action: None,
            datetime: None,
            priority: Priority::ToBeScheduled,
            text: "to be scheduled".to_string(),
        },
    }
}

#[fixture]
pub fn course() -> Course {
    course_with("7", "Intro")
}

#[fixture]
pub fn cover_image() -> CoverImage {
    CoverImage {
        src: "/media/cover_300.jpg".to_string(),
        srcset: "/media/cover_300.jpg 300w, /media/cover_600.jpg 600w".to_string(),
        sizes: "(max-width: 600px) 300px, 600px".to_string(),
    }
}

#[fixture]
pub fn icon() -> CourseIcon {
    CourseIcon {
        src: "/media/icon_60.png".to_string(),
        srcset: "/media/icon_60.png 60w, /media/icon_120.png 120w".to_string(),
        sizes: "60px".to_string(),
        color: "#f72c30".to_string(),
        title: "Certificate".to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct LocalizedGlimpseProps {
    pub catalog: Rc<Catalog>,
    pub context: GlimpseContext,
    pub course: Rc<Course>,
}

#[function_component(LocalizedGlimpse)]
pub fn localized_glimpse(props: &LocalizedGlimpseProps) -> Html {
    html! {
        <IntlProvider catalog={props.catalog.clone()}>
            <CourseGlimpse context={props.context} course={props.course.clone()} />
        </IntlProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct LocalizedListProps {
    pub catalog: Rc<Catalog>,
    pub context: GlimpseContext,
    pub courses: Rc<Vec<Rc<Course>>>,
}

#[function_component(LocalizedList)]
pub fn localized_list(props: &LocalizedListProps) -> Html {
    html! {
        <IntlProvider catalog={props.catalog.clone()}>
            <CourseGlimpseList context={props.context} courses={props.courses.clone()} />
        </IntlProvider>
    }
}
