use crate::i18n::t;
use nusantara_atlas::SpeciesDetail;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SpeciesModalProps {
    /// Content to show; `None` keeps the overlay hidden.
    pub detail: Option<SpeciesDetail>,
    pub on_close: Callback<()>,
}

fn detail_row(slot_id: &'static str, label_key: &str, text: &str) -> Html {
    html! {
        <div class="modal-row">
            <h4>{ t(label_key) }</h4>
            <p id={slot_id}>{ text.to_string() }</p>
        </div>
    }
}

#[function_component(SpeciesModal)]
pub fn species_modal(props: &SpeciesModalProps) -> Html {
    let Some(detail) = props.detail.as_ref() else {
        return Html::default();
    };

    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    // Only clicks that land on the backdrop itself, not bubbled from the box.
    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = match (e.target(), e.current_target()) {
                (Some(target), Some(current)) => target == current,
                _ => false,
            };
            if on_backdrop {
                cb.emit(());
            }
        })
    };

    html! {
        <div
            id="speciesModal"
            class="modal active"
            role="dialog"
            aria-modal="true"
            aria-labelledby="modalTitle"
            onclick={on_backdrop}
        >
            <div class="modal-content">
                <div id="modalHeader" class={classes!("modal-header", detail.category.as_str())}>
                    <h2 id="modalTitle">{ detail.title.clone() }</h2>
                    <p id="modalSubtitle"><em>{ detail.subtitle.clone() }</em></p>
                    <button type="button" class="modal-close" aria-label={t("modal.close")} onclick={close}>
                        {"✕"}
                    </button>
                </div>
                <div class="modal-body">
                    { detail_row("modalHabitat", "modal.habitat", &detail.habitat) }
                    { detail_row("modalDesc", "modal.description", &detail.description) }
                    { detail_row("modalCiri", "modal.traits", &detail.traits) }
                    { detail_row("modalAncaman", "modal.threats", &detail.threats) }
                    <div class="modal-row">
                        <h4>{ t("modal.status") }</h4>
                        <span id="modalStatus" class={classes!("modal-status", detail.tier.class())}>
                            { detail.status.clone() }
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}
