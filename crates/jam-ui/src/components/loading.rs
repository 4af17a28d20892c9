use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingProps {
    #[prop_or(false)]
    pub small: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(Loading)]
pub(crate) fn loading(props: &LoadingProps) -> Html {
    let classes = classes!(
        "loading",
        "loading-spinner",
        if props.small { "loading-sm" } else { "loading-md" }
    );
    html! {
        <span class={classes} role="status" aria-label={props.label.clone()} />
    }
}
