use nusantara_atlas::AtlasAction;
use yew::prelude::*;

pub mod bootstrap;
pub mod overlay;
pub mod render;
pub mod state;
pub mod view;

pub use state::{PageHandle, PageState};

/// Page markup for the current state, with callbacks feeding the reducer.
#[must_use]
pub fn page_view(page: &PageHandle) -> Html {
    let dispatcher = page.dispatcher();
    let on_select = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |province: String| {
            dispatcher.dispatch(AtlasAction::Select(province));
        })
    };
    let on_open = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |target| {
            dispatcher.dispatch(AtlasAction::OpenDetail(target));
        })
    };
    let on_close = Callback::from(move |()| {
        dispatcher.dispatch(AtlasAction::CloseDetail);
    });

    html! {
        <view::AtlasPage
            state={page.0.clone()}
            {on_select}
            {on_open}
            {on_close}
        />
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let page = state::use_page_state();
    bootstrap::use_bootstrap(&page);
    render::use_render_commit(&page);
    overlay::use_overlay_lifecycle(&page);
    page_view(&page)
}
