use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::i18n::dictionary_translator;
use contracts::menu::{parse_resources, ResourceDescriptor};
use contracts::shared::{load_config, MenuConfig};
use leptos::prelude::*;
use std::collections::HashMap;

/// Resources of the demo admin: two groups and a few top-level entries.
pub const DEMO_RESOURCES: &str = r#"[
    {"name": "users", "options": {"label": "Users", "isMenuParent": true}, "icon": "users"},
    {"name": "posts", "options": {"label": "Posts", "menuParent": "users"}, "hasList": true},
    {"name": "groups", "options": {"label": "Groups", "isMenuParent": true}},
    {"name": "comments", "options": {"menuParent": "groups"}, "icon": "comment", "hasList": true},
    {"name": "audit_log", "options": {}, "hasList": true},
    {"name": "internal_jobs", "options": {"menu": false}, "hasList": true}
]"#;

pub fn demo_translations() -> HashMap<String, String> {
    HashMap::from([
        ("resources.comments.name".to_string(), "Comments".to_string()),
        ("ra.page.dashboard".to_string(), "Dashboard".to_string()),
    ])
}

pub fn demo_resources() -> Vec<ResourceDescriptor> {
    match parse_resources(DEMO_RESOURCES) {
        Ok(resources) => resources,
        Err(e) => {
            log::error!("demo resources: {:#}", e);
            Vec::new()
        }
    }
}

pub fn demo_config() -> MenuConfig {
    load_config(None).unwrap_or_else(|e| {
        log::error!("demo config: {:#}", e);
        MenuConfig::default()
    })
}

#[component]
pub fn App(
    resources: Vec<ResourceDescriptor>,
    config: MenuConfig,
    translations: HashMap<String, String>,
) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(resources, config));

    view! {
        <AppRoutes translate=dictionary_translator(translations) />
    }
}
