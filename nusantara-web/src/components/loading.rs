use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq, Clone)]
pub struct LoadingProps {
    pub active: bool,
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator(props: &LoadingProps) -> Html {
    let class = classes!("loading", props.active.then_some("active"));
    html! {
        <div id="loading" {class} role="status" aria-live="polite">
            <span class="loading-spinner"></span>
            <span>{ t("app.loading") }</span>
        </div>
    }
}
