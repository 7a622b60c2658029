//! Entry points for JavaScript hosts.
//!
//! ```js
//! import init, { mount_tree_menu } from "./treemenu.js";
//! await init();
//! const menu = mount_tree_menu("sidebar", resources, { hasDashboard: true }, i18n.translate, () => closeDrawer());
//! history.listen(({ pathname }) => menu.set_path(pathname));
//! ```

use crate::layout::left::TreeMenu;
use crate::shared::i18n::{dictionary_translator, function_translator, Translate};
use contracts::menu::ResourceDescriptor;
use contracts::shared::{load_config, MenuConfig};
use leptos::prelude::*;
use leptos_router::components::Router;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

fn decode_resources(value: JsValue) -> Result<Vec<ResourceDescriptor>, String> {
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("Invalid resources: {}", e))
}

fn decode_config(value: JsValue) -> Result<MenuConfig, String> {
    if value.is_undefined() || value.is_null() {
        return load_config(None).map_err(|e| format!("{:#}", e));
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("Invalid menu config: {}", e))
}

/// Host translations: a `(key) => string` function or a flat dictionary.
enum Translations {
    Function(js_sys::Function),
    Dictionary(HashMap<String, String>),
}

impl Translations {
    fn into_translator(self) -> Translate {
        match self {
            Translations::Function(f) => function_translator(f),
            Translations::Dictionary(dictionary) => dictionary_translator(dictionary),
        }
    }
}

fn decode_translations(value: JsValue) -> Result<Translations, String> {
    if value.is_undefined() || value.is_null() {
        return Ok(Translations::Dictionary(HashMap::new()));
    }
    if value.is_function() {
        return Ok(Translations::Function(value.unchecked_into()));
    }
    serde_wasm_bindgen::from_value(value)
        .map(Translations::Dictionary)
        .map_err(|e| format!("Invalid translations: {}", e))
}

fn current_browser_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Handle returned to the host for a mounted menu.
#[wasm_bindgen]
pub struct TreeMenuHandle {
    path: RwSignal<String>,
}

#[wasm_bindgen]
impl TreeMenuHandle {
    /// Tell the menu about a navigation the host performed itself.
    pub fn set_path(&self, path: &str) {
        log::debug!("tree menu: host path -> {}", path);
        self.path.set(path.to_string());
    }

    pub fn path(&self) -> String {
        self.path.get_untracked()
    }
}

fn mount_target(element_id: &str) -> Result<HtmlElement, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document object")?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| format!("Element #{} not found", element_id))?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("Element #{} is not an HTML element", element_id))
}

/// Mount a tree menu into the element with id `element_id`.
///
/// `config` and `translations` may be `undefined`; `translations` is either
/// a `(key) => string` function or a dictionary. `on_menu_click` is invoked
/// without arguments whenever an entry is activated. The returned handle
/// feeds host navigations into the menu.
#[wasm_bindgen]
pub fn mount_tree_menu(
    element_id: &str,
    resources: JsValue,
    config: JsValue,
    translations: JsValue,
    on_menu_click: Option<js_sys::Function>,
) -> Result<TreeMenuHandle, JsValue> {
    let mounted = (|| -> Result<TreeMenuHandle, String> {
        let resources = decode_resources(resources)?;
        let config = decode_config(config)?;
        let translations = decode_translations(translations)?;
        let target = mount_target(element_id)?;
        let path = RwSignal::new(current_browser_path());

        log::info!(
            "mounting tree menu into #{} ({} resources)",
            element_id,
            resources.len()
        );

        leptos::mount::mount_to(target, move || {
            let on_menu_click = on_menu_click.map(|f| {
                let f = StoredValue::new_local(f);
                Callback::new(move |_: ()| {
                    f.with_value(|f| {
                        if let Err(e) = f.call0(&JsValue::NULL) {
                            log::error!("on_menu_click failed: {:?}", e);
                        }
                    })
                })
            });
            let sidebar_open = RwSignal::new(config.sidebar_open);

            view! {
                <Router>
                    <TreeMenu
                        resources=resources
                        sidebar_open=sidebar_open
                        dense=config.dense
                        pathname=path
                        has_dashboard=config.has_dashboard
                        custom_entries=config.custom_entries
                        translate=translations.into_translator()
                        on_menu_click=on_menu_click.unwrap_or_else(|| Callback::new(|_: ()| {}))
                    />
                </Router>
            }
        })
        .forget();
        Ok(TreeMenuHandle { path })
    })();

    mounted.map_err(|e| {
        log::error!("mount_tree_menu: {}", e);
        JsValue::from_str(&e)
    })
}
