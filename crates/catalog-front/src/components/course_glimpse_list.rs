use std::rc::Rc;

use yew::prelude::*;

use crate::components::CourseGlimpse;
use crate::i18n::{FormattedMessage, MessageDescriptor};
use crate::models::{Course, GlimpseContext};

pub const EMPTY_LIST_MESSAGE: MessageDescriptor = MessageDescriptor {
    id: "components.CourseGlimpseList.empty",
    default_message: "No course to display",
    description: "Shown in a course listing that has no course",
};

#[derive(Properties, PartialEq)]
pub struct CourseGlimpseListProps {
    pub context: GlimpseContext,
    pub courses: Rc<Vec<Rc<Course>>>,
}

#[function_component(CourseGlimpseList)]
pub fn course_glimpse_list(props: &CourseGlimpseListProps) -> Html {
    html! {
        <div class="course-glimpse-list">
            if props.courses.is_empty() {
                <p class="course-glimpse-list__empty">
                    <FormattedMessage message={EMPTY_LIST_MESSAGE} />
                </p>
            } else {
                { for props.courses.iter().map(|course| {
                    html! {
                        <CourseGlimpse
                            key={course.id.clone()}
                            context={props.context}
                            course={course.clone()}
                        />
                    }
                })}
            }
        </div>
    }
}
