use std::rc::Rc;

use yew::prelude::*;

use crate::components::Icon;
use crate::models::{Course, GlimpseContext};
use crate::utils::{capitalize_first, format_short_date};

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct CourseGlimpseFooterProps {
    pub context: GlimpseContext,
    pub course: Rc<Course>,
}

/// Bottom strip of a glimpse: the course run state and its call to action,
/// shown exactly as the catalog API computed them.
#[function_component(CourseGlimpseFooter)]
pub fn course_glimpse_footer(props: &CourseGlimpseFooterProps) -> Html {
    let state = &props.course.state;

    let state_text = match state.datetime.as_deref() {
        Some(datetime) => format!(
            "{} {}",
            capitalize_first(&state.text),
            format_short_date(datetime)
        ),
        None => capitalize_first(&state.text),
    };
    let call_to_action = state
        .call_to_action
        .as_deref()
        .filter(|cta| !cta.is_empty());

    html! {
        <div class="course-glimpse-footer" data-context={props.context.as_str()}>
            <div class="course-glimpse-footer__date">
                <Icon name="icon-calendar" />
                <span>{state_text}</span>
            </div>
            if let Some(cta) = call_to_action {
                <div class="course-glimpse-footer__cta">
                    <span class="course-glimpse-footer__cta__label">{cta}</span>
                </div>
            }
        </div>
    }
}
