use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::loading::LoadingIndicator;
use crate::components::profile_card::{FieldRow, ProfileCard};
use crate::components::province_select::ProvinceSelect;
use crate::components::species_modal::SpeciesModal;
use crate::i18n::t;
use nusantara_atlas::{
    AtlasState, Category, FAUNA_FIELDS, FLORA_FIELDS, FieldSlot, OverlayTarget, ProvinceRecord,
};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AtlasPageProps {
    pub state: AtlasState,
    pub on_select: Callback<String>,
    pub on_open: Callback<OverlayTarget>,
    pub on_close: Callback<()>,
}

fn field_rows<P: 'static>(slots: &'static [FieldSlot<P>], profile: &P) -> Vec<FieldRow> {
    slots
        .iter()
        .map(|slot| FieldRow {
            slot_id: AttrValue::from(slot.slot_id),
            label: AttrValue::from(t(slot.label_key)),
            text: AttrValue::from(slot.text(profile).to_string()),
        })
        .collect()
}

fn tile_names(record: &ProvinceRecord, category: Category) -> Vec<AttrValue> {
    record
        .others(category)
        .iter()
        .map(|entry| AttrValue::from(entry.tile_name().to_string()))
        .collect()
}

fn render_cards(record: &ProvinceRecord, on_open: &Callback<OverlayTarget>) -> Html {
    let flora = &record.flora;
    let fauna = &record.fauna;
    html! {
        <div class="cards">
            <ProfileCard
                category={Category::Flora}
                name={AttrValue::from(flora.nama.clone())}
                latin={AttrValue::from(flora.latin.clone())}
                status={AttrValue::from(flora.status.clone())}
                rows={field_rows(FLORA_FIELDS, flora)}
                others={tile_names(record, Category::Flora)}
                on_open={on_open.clone()}
            />
            <ProfileCard
                category={Category::Fauna}
                name={AttrValue::from(fauna.nama.clone())}
                latin={AttrValue::from(fauna.latin.clone())}
                status={AttrValue::from(fauna.status.clone())}
                rows={field_rows(FAUNA_FIELDS, fauna)}
                others={tile_names(record, Category::Fauna)}
                on_open={on_open.clone()}
            />
        </div>
    }
}

/// Whole page for one state snapshot.
#[function_component(AtlasPage)]
pub fn atlas_page(props: &AtlasPageProps) -> Html {
    let state = &props.state;
    let options: Vec<AttrValue> = state
        .database()
        .province_names()
        .map(|name| AttrValue::from(name.to_string()))
        .collect();
    let busy = !state.is_loaded() || state.is_busy();
    let content = state
        .displayed_record()
        .map(|(_, record)| render_cards(record, &props.on_open))
        .unwrap_or_default();
    let content_style = if busy { "opacity: 0" } else { "opacity: 1" };

    html! {
        <>
            <Header province_count={state.database().len()} />
            <main id="main" role="main">
                <ProvinceSelect
                    {options}
                    value={AttrValue::from(state.selected().to_string())}
                    on_change={props.on_select.clone()}
                />
                <LoadingIndicator active={busy} />
                <div id="content" class="content" style={content_style} aria-busy={busy.to_string()}>
                    { content }
                </div>
            </main>
            <SpeciesModal detail={state.overlay().cloned()} on_close={props.on_close.clone()} />
            <Footer />
        </>
    }
}
