use super::descriptor::ResourceDescriptor;

/// Prefix of translation keys for resource names.
///
/// A translator returning a string that still starts with it did not
/// resolve the key.
pub const RESOURCES_KEY_PREFIX: &str = "resources.";

/// Label translation provided by the host.
///
/// Unresolved keys are returned verbatim.
pub trait Translator {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Translator that resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Translation key of the dashboard entry.
pub const DASHBOARD_KEY: &str = "ra.page.dashboard";
const DASHBOARD_FALLBACK: &str = "Dashboard";

pub fn translation_key(name: &str) -> String {
    format!("{}{}.name", RESOURCES_KEY_PREFIX, name)
}

/// Display label of a resource.
///
/// Explicit `options.label` wins, then the `resources.{name}.name`
/// translation, then the title-cased resource name.
pub fn resolve_label(resource: &ResourceDescriptor, translator: &dyn Translator) -> String {
    if let Some(label) = resource.options.label() {
        return label.to_string();
    }
    let translated = translator.translate(&translation_key(&resource.name));
    if translated.starts_with(RESOURCES_KEY_PREFIX) {
        humanize(&resource.name)
    } else {
        translated
    }
}

/// Label of the dashboard entry; `Dashboard` when the key is unresolved.
pub fn dashboard_label(translator: &dyn Translator) -> String {
    let translated = translator.translate(DASHBOARD_KEY);
    if translated == DASHBOARD_KEY {
        DASHBOARD_FALLBACK.to_string()
    } else {
        translated
    }
}

/// "blog_posts" -> "Blog Posts"
pub fn humanize(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::descriptor::OPT_LABEL;
    use std::collections::HashMap;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("posts"), "Posts");
        assert_eq!(humanize("blog_posts"), "Blog Posts");
        assert_eq!(humanize("_leading__double_"), "Leading Double");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_explicit_label_wins() {
        let resource = ResourceDescriptor::new("posts").with_option(OPT_LABEL, "Articles");
        let translator = |_: &str| "Translated".to_string();
        assert_eq!(resolve_label(&resource, &translator), "Articles");
    }

    #[test]
    fn test_translation_used_when_resolved() {
        let dictionary: HashMap<&str, &str> =
            HashMap::from([("resources.blog_posts.name", "Blog entries")]);
        let translator = |key: &str| {
            dictionary
                .get(key)
                .map(|s| s.to_string())
                .unwrap_or_else(|| key.to_string())
        };

        let known = ResourceDescriptor::new("blog_posts");
        let unknown = ResourceDescriptor::new("audit_log");
        assert_eq!(resolve_label(&known, &translator), "Blog entries");
        assert_eq!(resolve_label(&unknown, &translator), "Audit Log");
    }

    #[test]
    fn test_dashboard_label() {
        assert_eq!(dashboard_label(&IdentityTranslator), "Dashboard");

        let translator = |key: &str| {
            if key == DASHBOARD_KEY {
                "Tableau de bord".to_string()
            } else {
                key.to_string()
            }
        };
        assert_eq!(dashboard_label(&translator), "Tableau de bord");
    }

    #[test]
    fn test_identity_translator_falls_back() {
        let resource = ResourceDescriptor::new("user_groups");
        assert_eq!(resolve_label(&resource, &IdentityTranslator), "User Groups");
    }
}
