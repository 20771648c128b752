use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Symbol id in the page's SVG sprite, without the leading `#`.
    pub name: AttrValue,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let href = format!("#{}", props.name);

    html! {
        <svg aria-hidden="true" role="img" class="icon">
            <use href={href} />
        </svg>
    }
}
