use super::descriptor::ResourceDescriptor;

/// Expanded/collapsed flag per parent group, in first-seen order.
///
/// Updates are pure: every operation returns a new state and leaves the
/// flags it does not target untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    flags: Vec<(String, bool)>,
}

impl ExpansionState {
    /// All parents collapsed.
    pub fn seed(resources: &[ResourceDescriptor]) -> Self {
        Self::default().reseed(resources)
    }

    /// Adapts the state to a new resource list.
    ///
    /// Parents whose name persists keep their flag, new parents start
    /// collapsed, vanished parents are dropped.
    pub fn reseed(&self, resources: &[ResourceDescriptor]) -> Self {
        let mut flags: Vec<(String, bool)> = Vec::new();
        for resource in resources.iter().filter(|r| r.is_parent()) {
            if flags.iter().any(|(name, _)| name == &resource.name) {
                continue;
            }
            let expanded = self.is_expanded(&resource.name);
            flags.push((resource.name.clone(), expanded));
        }
        Self { flags }
    }

    pub fn is_expanded(&self, parent: &str) -> bool {
        self.flags
            .iter()
            .find(|(name, _)| name == parent)
            .map(|(_, expanded)| *expanded)
            .unwrap_or(false)
    }

    /// Flips the flag of `parent` only. An unknown parent is added expanded.
    pub fn toggled(&self, parent: &str) -> Self {
        let mut flags = self.flags.clone();
        match flags.iter_mut().find(|(name, _)| name == parent) {
            Some((_, expanded)) => *expanded = !*expanded,
            None => flags.push((parent.to_string(), true)),
        }
        Self { flags }
    }

    /// Whether the group renders expanded: stored flag or active parent.
    pub fn renders_expanded(&self, parent: &str, active_parent: Option<&str>) -> bool {
        self.is_expanded(parent) || active_parent == Some(parent)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(|(name, _)| name.as_str())
    }
}

/// First non-parent whose path prefixes `current_path` and that declares a
/// `menuParent`; yields the name of that parent.
pub fn active_parent<'a>(resources: &'a [ResourceDescriptor], current_path: &str) -> Option<&'a str> {
    resources
        .iter()
        .filter(|r| !r.is_parent())
        .filter(|r| current_path.starts_with(&r.path()))
        .find_map(|r| r.options.menu_parent())
}
