use serde_json::Value;

/// Language of the embedded strings.
pub const LANG: &str = "id";

const STRINGS: &str = include_str!("../../i18n/id.json");

pub struct I18nBundle {
    pub lang: &'static str,
    pub translations: Value,
}

fn build_bundle() -> I18nBundle {
    let translations = serde_json::from_str(STRINGS).unwrap_or_else(|err| {
        log::error!("embedded UI strings are malformed: {err}");
        Value::Object(serde_json::Map::new())
    });
    I18nBundle {
        lang: LANG,
        translations,
    }
}

thread_local! {
    static CURRENT: I18nBundle = build_bundle();
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(f)
}
