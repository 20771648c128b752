use std::rc::Rc;

use yew::prelude::*;

use crate::components::Icon;
use crate::i18n::{FormattedMessage, MessageDescriptor};
use crate::models::{Course, GlimpseContext};
use crate::utils::code_or_placeholder;

pub mod footer;

pub use footer::*;

pub const COVER_MESSAGE: MessageDescriptor = MessageDescriptor {
    id: "components.CourseGlimpse.cover",
    default_message: "Cover",
    description: "Placeholder shown in place of a missing course cover image",
};

#[derive(Properties, Clone, Debug)]
pub struct CourseGlimpseProps {
    pub context: GlimpseContext,
    pub course: Rc<Course>,
}

/// Whether a glimpse can keep its previous output for `next`.
///
/// Only the listing context and the course id are compared. A course whose
/// title, images or state change under the same id keeps rendering the old
/// values for as long as the glimpse stays mounted.
pub fn glimpse_props_equal(prev: &CourseGlimpseProps, next: &CourseGlimpseProps) -> bool {
    prev.context == next.context && prev.course.id == next.course.id
}

impl PartialEq for CourseGlimpseProps {
    fn eq(&self, other: &Self) -> bool {
        glimpse_props_equal(self, other)
    }
}

#[function_component(CourseGlimpse)]
pub fn course_glimpse(props: &CourseGlimpseProps) -> Html {
    let course = &props.course;

    html! {
        <a class="course-glimpse course-glimpse--link" href={course.absolute_url.clone()}>
            <div class="course-glimpse__media">
                if let Some(cover) = &course.cover_image {
                    <img
                        alt=""
                        sizes={cover.sizes.clone()}
                        src={cover.src.clone()}
                        srcset={cover.srcset.clone()}
                    />
                } else {
                    <div class="course-glimpse__media__empty">
                        <FormattedMessage message={COVER_MESSAGE} />
                    </div>
                }
            </div>
            <div class="course-glimpse__content">
                if let Some(icon) = &course.icon {
                    <div class="course-glimpse__icon">
                        <div class="course-glimpse__band" style={format!("background: {}", icon.color)}>
                            {&icon.title}
                        </div>
                        <img
                            src={icon.src.clone()}
                            srcset={icon.srcset.clone()}
                            sizes={icon.sizes.clone()}
                            alt=""
                        />
                    </div>
                }
                <div class="course-glimpse__wrapper">
                    <p class="course-glimpse__title">{&course.title}</p>
                    <div class="course-glimpse__organization">
                        <Icon name="icon-org" />
                        <span>{&course.organization_highlighted}</span>
                    </div>
                    <div class="course-glimpse__code">
                        <Icon name="icon-barcode" />
                        <span>{code_or_placeholder(course.code.as_deref())}</span>
                    </div>
                </div>
                <CourseGlimpseFooter context={props.context} course={course.clone()} />
            </div>
        </a>
    }
}
