use crate::app::state::PageHandle;
use crate::{dom, input};
use nusantara_atlas::AtlasAction;
use yew::prelude::*;

/// Wire the detail overlay to the page: Escape closes it, and background
/// scrolling follows its visibility.
#[hook]
pub fn use_overlay_lifecycle(page: &PageHandle) {
    let dispatcher = page.dispatcher();
    use_effect_with((), move |()| {
        input::register_escape_listener();
        input::set_escape_handler(Callback::from(move |()| {
            dispatcher.dispatch(AtlasAction::CloseDetail);
        }));
        input::clear_escape_handler
    });

    let locked = page.scroll_locked();
    use_effect_with(locked, |locked| {
        dom::set_scroll_locked(*locked);
        || {}
    });
}
