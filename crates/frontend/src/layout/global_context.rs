use contracts::menu::ResourceDescriptor;
use contracts::shared::MenuConfig;
use leptos::prelude::*;

/// Shell-wide state of the demo admin app.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub resources: RwSignal<Vec<ResourceDescriptor>>,
    pub left_open: RwSignal<bool>,
    pub dense: RwSignal<bool>,
    pub config: StoredValue<MenuConfig>,
}

impl AppGlobalContext {
    pub fn new(resources: Vec<ResourceDescriptor>, config: MenuConfig) -> Self {
        Self {
            resources: RwSignal::new(resources),
            left_open: RwSignal::new(config.sidebar_open),
            dense: RwSignal::new(config.dense),
            config: StoredValue::new(config),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
        log::debug!("sidebar open: {}", self.left_open.get_untracked());
    }

    pub fn toggle_dense(&self) {
        self.dense.update(|val| *val = !*val);
        log::debug!("dense menu: {}", self.dense.get_untracked());
    }

    /// Resource whose path prefixes `pathname`, if any.
    pub fn resource_for_path(&self, pathname: &str) -> Option<ResourceDescriptor> {
        self.resources.with(|list| {
            list.iter()
                .find(|r| pathname.starts_with(&r.path()))
                .cloned()
        })
    }
}
