use crate::app::state::PageHandle;
use crate::dom;
use nusantara_atlas::{Database, LoadError};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

fn network_error(value: &JsValue) -> LoadError {
    LoadError::Network(dom::js_error_message(value))
}

/// Fetch and parse the province document.
///
/// # Errors
/// Returns [`LoadError::Network`] when the request fails or answers with a
/// non-success status, and [`LoadError::Parse`] when the body is not a
/// province mapping.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_database(url: &str) -> Result<Database, LoadError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|e| network_error(&e))?;
    if !response.ok() {
        return Err(LoadError::Network(format!(
            "HTTP {} while fetching {url}",
            response.status()
        )));
    }
    let body = JsFuture::from(response.text().map_err(|e| network_error(&e))?)
        .await
        .map_err(|e| network_error(&e))?;
    let text = body
        .as_string()
        .ok_or_else(|| LoadError::Network(format!("response body of {url} is not text")))?;
    Database::from_json(&text)
}

/// Log a load failure. The page stays in its loading state.
pub fn report_load_error(err: &LoadError) {
    log::error!("Failed to initialize app: {err}");
    dom::console_error(&format!("Failed to initialize app: {err}"));
}

/// Load the province document once, after the first render.
#[hook]
pub fn use_bootstrap(page: &PageHandle) {
    let dispatcher = page.dispatcher();
    use_effect_with((), move |()| {
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_database(&crate::paths::data_url()).await {
                Ok(database) => {
                    log::debug!("loaded {} provinces", database.len());
                    dispatcher.dispatch(nusantara_atlas::AtlasAction::Loaded(
                        std::sync::Arc::new(database),
                    ));
                }
                Err(err) => report_load_error(&err),
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = dispatcher;
        || {}
    });
}
