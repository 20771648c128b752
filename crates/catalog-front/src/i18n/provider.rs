use std::rc::Rc;

use yew::prelude::*;

use super::{Catalog, MessageDescriptor};

/// Translation context shared with every component below an [`IntlProvider`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Intl(pub Rc<Catalog>);

impl Intl {
    pub fn format(&self, message: &MessageDescriptor) -> String {
        self.0.format(message)
    }

    pub fn locale(&self) -> &str {
        self.0.locale()
    }
}

#[derive(Properties, PartialEq)]
pub struct IntlProviderProps {
    pub catalog: Rc<Catalog>,
    pub children: Children,
}

#[function_component(IntlProvider)]
pub fn intl_provider(props: &IntlProviderProps) -> Html {
    let intl = Intl(props.catalog.clone());

    html! {
        <ContextProvider<Intl> context={intl}>
            {for props.children.iter()}
        </ContextProvider<Intl>>
    }
}

/// Without a provider, messages render with their default text.
#[hook]
pub fn use_intl() -> Intl {
    use_context::<Intl>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct FormattedMessageProps {
    pub message: MessageDescriptor,
}

#[function_component(FormattedMessage)]
pub fn formatted_message(props: &FormattedMessageProps) -> Html {
    let intl = use_intl();

    html! { {intl.format(&props.message)} }
}
