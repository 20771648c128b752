use std::rc::Rc;

use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::CourseGlimpseList;
use crate::i18n::{Catalog, IntlProvider};
use crate::models::{effective_locale, Course, GlimpseContext, LocaleState};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub context: GlimpseContext,
    pub courses: Rc<Vec<Rc<Course>>>,
    #[prop_or_default]
    pub locale: Option<AttrValue>,
}

#[cfg(target_arch = "wasm32")]
fn browser_language() -> Option<String> {
    web_sys::window().and_then(|w| w.navigator().language())
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_language() -> Option<String> {
    None
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let (locale_state, dispatch) = use_store::<LocaleState>();
    let browser_locale = use_memo((), |_| browser_language());

    {
        let dispatch = dispatch.clone();
        use_effect_with(props.locale.clone(), move |requested| {
            if let Some(requested) = requested {
                dispatch.reduce_mut(|state| {
                    state.remember(requested);
                });
            }
            || ()
        });
    }

    let locale = effective_locale(
        props.locale.as_deref(),
        locale_state.locale.as_deref(),
        browser_locale.as_deref(),
    );
    let catalog = use_memo(locale, |locale| Catalog::resolve(locale));

    html! {
        <IntlProvider catalog={catalog}>
            <CourseGlimpseList context={props.context} courses={props.courses.clone()} />
        </IntlProvider>
    }
}
