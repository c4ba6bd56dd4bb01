use crate::components::species_grid::SpeciesGrid;
use crate::components::status_badge::StatusBadge;
use crate::i18n::t;
use nusantara_atlas::{Category, OverlayTarget};
use yew::prelude::*;

/// One labelled display slot of a profile card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRow {
    pub slot_id: AttrValue,
    pub label: AttrValue,
    pub text: AttrValue,
}

/// Fixed element ids for the parts of a card that are not table-driven.
struct CardSlots {
    name: &'static str,
    latin: &'static str,
    status: &'static str,
    others: &'static str,
}

const fn card_slots(category: Category) -> CardSlots {
    match category {
        Category::Flora => CardSlots {
            name: "floraName",
            latin: "floraLatin",
            status: "f_status",
            others: "floraOthers",
        },
        Category::Fauna => CardSlots {
            name: "faunaName",
            latin: "faunaLatin",
            status: "a_status",
            others: "faunaOthers",
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileCardProps {
    pub category: Category,
    pub name: AttrValue,
    pub latin: AttrValue,
    pub status: AttrValue,
    pub rows: Vec<FieldRow>,
    pub others: Vec<AttrValue>,
    #[prop_or_default]
    pub on_open: Callback<OverlayTarget>,
}

#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let slots = card_slots(props.category);
    let prefix = props.category.as_str();
    html! {
        <section class={classes!("card", prefix)} aria-labelledby={slots.name}>
            <p class="card-kicker">{ t(&format!("{prefix}.heading")) }</p>
            <h2 id={slots.name}>{ props.name.clone() }</h2>
            <p id={slots.latin} class="latin"><em>{ props.latin.clone() }</em></p>
            <div class="status-line">
                <span>{ t("status.label") }</span>
                <StatusBadge id={slots.status} status={props.status.clone()} />
            </div>
            <dl class="fields">
                { for props.rows.iter().map(|row| html! {
                    <div class="field">
                        <dt>{ row.label.clone() }</dt>
                        <dd id={row.slot_id.clone()}>{ row.text.clone() }</dd>
                    </div>
                })}
            </dl>
            <h3>{ t(&format!("{prefix}.others")) }</h3>
            <SpeciesGrid
                id={slots.others}
                category={props.category}
                names={props.others.clone()}
                on_open={props.on_open.clone()}
            />
        </section>
    }
}
