use crate::app::state::{PageHandle, PageState};
use nusantara_atlas::RenderToken;
use yew::prelude::*;

/// Commit each render once its transition delay has elapsed.
///
/// Every timer dispatches its own token; the reducer drops any that are no
/// longer current.
#[hook]
pub fn use_render_commit(page: &PageHandle) {
    let pending = page.pending_render();
    let dispatcher = page.dispatcher();
    use_effect_with(pending, move |pending| {
        if let Some(token) = *pending {
            schedule_commit(token, dispatcher);
        }
        || {}
    });
}

fn schedule_commit(token: RenderToken, dispatcher: UseReducerDispatcher<PageState>) {
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        use nusantara_atlas::constants::RENDER_TRANSITION_MS;
        if let Err(err) = crate::dom::sleep_ms(RENDER_TRANSITION_MS).await {
            crate::dom::console_error(&format!(
                "Render transition timer failed: {}",
                crate::dom::js_error_message(&err)
            ));
        }
        dispatcher.dispatch(nusantara_atlas::AtlasAction::Commit(token));
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (token, dispatcher);
}
