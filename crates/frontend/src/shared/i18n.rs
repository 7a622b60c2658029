//! Label translation for the menu
//!
//! JS hosts pass either a translation function `(key) => string` or a flat
//! dictionary (`{"resources.posts.name": "Articles"}`). Unresolved keys come
//! back verbatim so the label resolver can fall back to the resource name.

use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::JsValue;

pub type Translate = Callback<String, String>;

pub fn lookup(dictionary: &HashMap<String, String>, key: &str) -> String {
    dictionary
        .get(key)
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

/// Result of a host translation call; the key itself when the call threw
/// or returned anything but a string.
pub fn translated_or_key(key: &str, translated: Option<String>) -> String {
    translated.unwrap_or_else(|| key.to_string())
}

pub fn dictionary_translator(dictionary: HashMap<String, String>) -> Translate {
    Callback::new(move |key: String| lookup(&dictionary, &key))
}

/// Wraps a host `(key) => string` function.
pub fn function_translator(translate: js_sys::Function) -> Translate {
    let translate = StoredValue::new_local(translate);
    Callback::new(move |key: String| {
        let translated = translate.with_value(|f| {
            match f.call1(&JsValue::NULL, &JsValue::from_str(&key)) {
                Ok(value) => value.as_string(),
                Err(e) => {
                    log::error!("translate('{}') failed: {:?}", key, e);
                    None
                }
            }
        });
        translated_or_key(&key, translated)
    })
}

pub fn identity_translator() -> Translate {
    Callback::new(|key: String| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_key_when_missing() {
        let dictionary = HashMap::from([(
            "resources.posts.name".to_string(),
            "Articles".to_string(),
        )]);
        assert_eq!(lookup(&dictionary, "resources.posts.name"), "Articles");
        assert_eq!(
            lookup(&dictionary, "resources.comments.name"),
            "resources.comments.name"
        );
    }

    #[test]
    fn test_failed_host_translation_returns_key() {
        assert_eq!(
            translated_or_key("resources.posts.name", None),
            "resources.posts.name"
        );
        assert_eq!(
            translated_or_key("resources.posts.name", Some("Articles".to_string())),
            "Articles"
        );
    }
}
