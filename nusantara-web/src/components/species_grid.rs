use crate::i18n::t;
use nusantara_atlas::{Category, OverlayTarget};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SpeciesGridProps {
    pub id: AttrValue,
    pub category: Category,
    /// Tile labels, in list order.
    pub names: Vec<AttrValue>,
    #[prop_or_default]
    pub on_open: Callback<OverlayTarget>,
}

#[function_component(SpeciesGrid)]
pub fn species_grid(props: &SpeciesGridProps) -> Html {
    if props.names.is_empty() {
        return html! {
            <div id={props.id.clone()} class="others-grid">
                <p class="others-empty">{ t("others.empty") }</p>
            </div>
        };
    }
    let category = props.category;
    html! {
        <div id={props.id.clone()} class="others-grid">
            { for props.names.iter().enumerate().map(|(index, name)| {
                let onclick = {
                    let cb = props.on_open.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(OverlayTarget { index, category }))
                };
                html! {
                    <div
                        class={classes!("others-item", category.as_str())}
                        data-index={index.to_string()}
                        {onclick}
                    >
                        <span>{ name.clone() }</span>
                    </div>
                }
            })}
        </div>
    }
}
