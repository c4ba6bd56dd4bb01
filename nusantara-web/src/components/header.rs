use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq, Clone)]
pub struct Props {
    pub province_count: usize,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let subtitle = (p.province_count > 0).then(|| {
        let count = p.province_count.to_string();
        let mut vars = BTreeMap::new();
        vars.insert("count", count.as_str());
        tr("app.subtitle", Some(&vars))
    });
    html! {
        <header role="banner">
            <h1>{ t("app.title") }</h1>
            { subtitle.map(|s| html! { <p class="subtitle">{ s }</p> }).unwrap_or_default() }
        </header>
    }
}
