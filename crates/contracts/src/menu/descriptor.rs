use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const OPT_IS_MENU_PARENT: &str = "isMenuParent";
pub const OPT_MENU_PARENT: &str = "menuParent";
pub const OPT_LABEL: &str = "label";
pub const OPT_MENU: &str = "menu";

/// One resource declared by the host admin application.
///
/// Mirrors the JSON shape the host registers resources with:
/// ```json
/// { "name": "posts", "options": { "label": "Posts", "menuParent": "users" }, "hasList": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub name: String,
    #[serde(default)]
    pub options: ResourceOptions,
    /// Icon key understood by the widget's icon registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Resource has a list view. Resources without one are never clickable.
    #[serde(default)]
    pub has_list: bool,
}

impl ResourceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: ResourceOptions::default(),
            icon: None,
            has_list: false,
        }
    }

    pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.0.insert(key.to_string(), value.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_list(mut self, has_list: bool) -> Self {
        self.has_list = has_list;
        self
    }

    /// Navigation path of the resource.
    pub fn path(&self) -> String {
        format!("/{}", self.name)
    }

    /// Grouping header. Only truthiness of `isMenuParent` counts here.
    pub fn is_parent(&self) -> bool {
        self.options
            .get(OPT_IS_MENU_PARENT)
            .map(is_truthy)
            .unwrap_or(false)
    }

    pub fn is_child_of(&self, parent: &ResourceDescriptor) -> bool {
        self.options.menu_parent() == Some(parent.name.as_str())
    }

    /// Neither `isMenuParent` nor `menuParent` is present.
    ///
    /// Presence, not truthiness: `isMenuParent: false` still excludes the
    /// descriptor from the orphan bucket.
    pub fn is_orphan(&self) -> bool {
        !self.options.has_key(OPT_IS_MENU_PARENT) && !self.options.has_key(OPT_MENU_PARENT)
    }

    /// `false` only when `options.menu` is exactly `false`.
    pub fn shows_in_menu(&self) -> bool {
        !matches!(self.options.get(OPT_MENU), Some(Value::Bool(false)))
    }
}

/// Open mapping of resource options as received from the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceOptions(pub Map<String, Value>);

impl ResourceOptions {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn menu_parent(&self) -> Option<&str> {
        self.0.get(OPT_MENU_PARENT).and_then(Value::as_str)
    }

    pub fn label(&self) -> Option<&str> {
        self.0.get(OPT_LABEL).and_then(Value::as_str)
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parse the host's resource list from JSON.
pub fn parse_resources(json: &str) -> anyhow::Result<Vec<ResourceDescriptor>> {
    serde_json::from_str(json).context("Failed to parse resource descriptors")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_host_shape() {
        let resources = parse_resources(
            r#"[
                {"name": "users", "options": {"label": "Users", "isMenuParent": true}, "icon": "users"},
                {"name": "posts", "options": {"label": "Posts", "menuParent": "users"}, "hasList": true},
                {"name": "tags"}
            ]"#,
        )
        .unwrap();

        assert_eq!(resources.len(), 3);
        assert!(resources[0].is_parent());
        assert_eq!(resources[0].icon.as_deref(), Some("users"));
        assert!(!resources[0].has_list);
        assert!(resources[1].is_child_of(&resources[0]));
        assert!(resources[1].has_list);
        assert!(resources[2].options.0.is_empty());
        assert!(resources[2].is_orphan());
    }

    #[test]
    fn test_parse_rejects_missing_name() {
        let err = parse_resources(r#"[{"options": {}}]"#).unwrap_err();
        assert!(err.to_string().contains("resource descriptors"));
    }

    #[test]
    fn test_is_parent_uses_truthiness() {
        let yes = ResourceDescriptor::new("a").with_option(OPT_IS_MENU_PARENT, 1);
        let no = ResourceDescriptor::new("b").with_option(OPT_IS_MENU_PARENT, "");
        let explicit_false = ResourceDescriptor::new("c").with_option(OPT_IS_MENU_PARENT, false);

        assert!(yes.is_parent());
        assert!(!no.is_parent());
        assert!(!explicit_false.is_parent());
        // present key keeps it out of the orphan bucket
        assert!(!explicit_false.is_orphan());
    }

    #[test]
    fn test_child_requires_string_match() {
        let parent = ResourceDescriptor::new("users").with_option(OPT_IS_MENU_PARENT, true);
        let child = ResourceDescriptor::new("posts").with_option(OPT_MENU_PARENT, "users");
        let numeric = ResourceDescriptor::new("x").with_option(OPT_MENU_PARENT, json!(1));

        assert!(child.is_child_of(&parent));
        assert!(!numeric.is_child_of(&parent));
        assert!(!numeric.is_orphan());
    }

    #[test]
    fn test_shows_in_menu_only_hidden_by_false() {
        assert!(ResourceDescriptor::new("a").shows_in_menu());
        assert!(ResourceDescriptor::new("a").with_option(OPT_MENU, 0).shows_in_menu());
        assert!(!ResourceDescriptor::new("a").with_option(OPT_MENU, false).shows_in_menu());
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!(-2.5)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
