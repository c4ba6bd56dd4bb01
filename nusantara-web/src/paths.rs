//! Helpers for constructing URLs to static assets that respect the deployment base path.
use nusantara_atlas::constants::DATA_PATH;

/// Prefix `relative` with the compile-time `PUBLIC_URL` (e.g. `/atlas` on
/// GitHub Pages). Builds without `PUBLIC_URL` resolve against the page.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// URL of the province document.
#[must_use]
pub fn data_url() -> String {
    asset_path(DATA_PATH)
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        rel.to_string()
    } else {
        format!("{base}/{rel}")
    }
}
