use super::descriptor::ResourceDescriptor;
use serde::{Deserialize, Serialize};

/// Pre-built entry supplied by the host, appended after the resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntry {
    pub key: String,
    pub to: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// Parent header with its list-capable children in declaration order.
    Group {
        parent: ResourceDescriptor,
        children: Vec<ResourceDescriptor>,
    },
    /// Top-level resource link.
    Leaf(ResourceDescriptor),
    Custom(CustomEntry),
}

impl RenderNode {
    pub fn key(&self) -> &str {
        match self {
            RenderNode::Group { parent, .. } => &parent.name,
            RenderNode::Leaf(resource) => &resource.name,
            RenderNode::Custom(entry) => &entry.key,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPlan {
    pub nodes: Vec<RenderNode>,
    /// Resources rendered neither as group, leaf nor child.
    pub omitted: Vec<String>,
}

impl RenderPlan {
    pub fn group_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, RenderNode::Group { .. }))
            .count()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, RenderNode::Leaf(_)))
            .count()
    }
}

/// Single pass over `resources` in declaration order.
///
/// A parent is never nested, even when it names another parent in
/// `menuParent`.
///
/// Never fails: descriptors that fit no bucket are left out of the plan.
pub fn build_render_plan(resources: &[ResourceDescriptor], extras: &[CustomEntry]) -> RenderPlan {
    let mut nodes = Vec::new();

    for resource in resources {
        if resource.is_parent() {
            let children = resources
                .iter()
                .filter(|c| !c.is_parent() && c.is_child_of(resource) && c.has_list)
                .cloned()
                .collect();
            nodes.push(RenderNode::Group {
                parent: resource.clone(),
                children,
            });
        } else if resource.is_orphan() && resource.has_list && resource.shows_in_menu() {
            nodes.push(RenderNode::Leaf(resource.clone()));
        }
    }

    let omitted = resources
        .iter()
        .filter(|r| !is_rendered(r, resources))
        .map(|r| r.name.clone())
        .collect();

    nodes.extend(extras.iter().cloned().map(RenderNode::Custom));

    RenderPlan { nodes, omitted }
}

fn is_rendered(resource: &ResourceDescriptor, resources: &[ResourceDescriptor]) -> bool {
    if resource.is_parent() {
        return true;
    }
    if resource.is_orphan() {
        return resource.has_list && resource.shows_in_menu();
    }
    resource.has_list
        && resources
            .iter()
            .any(|p| p.is_parent() && resource.is_child_of(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::descriptor::{OPT_IS_MENU_PARENT, OPT_LABEL, OPT_MENU, OPT_MENU_PARENT};
    use std::collections::HashMap;

    fn parent(name: &str) -> ResourceDescriptor {
        ResourceDescriptor::new(name).with_option(OPT_IS_MENU_PARENT, true)
    }

    fn child(name: &str, of: &str) -> ResourceDescriptor {
        ResourceDescriptor::new(name)
            .with_option(OPT_MENU_PARENT, of)
            .with_list(true)
    }

    fn orphan(name: &str) -> ResourceDescriptor {
        ResourceDescriptor::new(name).with_list(true)
    }

    fn shape(plan: &RenderPlan) -> Vec<String> {
        plan.nodes
            .iter()
            .map(|n| match n {
                RenderNode::Group { parent, children } => format!(
                    "group:{}[{}]",
                    parent.name,
                    children
                        .iter()
                        .map(|c| c.name.as_str())
                        .collect::<Vec<_>>()
                        .join(",")
                ),
                RenderNode::Leaf(r) => format!("leaf:{}", r.name),
                RenderNode::Custom(e) => format!("custom:{}", e.key),
            })
            .collect()
    }

    #[test]
    fn test_users_groups_example() {
        let resources = vec![
            parent("users").with_option(OPT_LABEL, "Users"),
            child("posts", "users").with_option(OPT_LABEL, "Posts"),
            parent("groups").with_option(OPT_LABEL, "Groups"),
            child("comments", "groups").with_option(OPT_LABEL, "Comments"),
        ];
        let plan = build_render_plan(&resources, &[]);

        assert_eq!(
            shape(&plan),
            vec!["group:users[posts]", "group:groups[comments]"]
        );
        assert_eq!(plan.leaf_count(), 0);
        assert!(plan.omitted.is_empty());
    }

    #[test]
    fn test_orphans_keep_declaration_position() {
        let resources = vec![
            orphan("dashboard_stats"),
            parent("users"),
            orphan("tags"),
            child("posts", "users"),
        ];
        let plan = build_render_plan(&resources, &[]);

        assert_eq!(
            shape(&plan),
            vec!["leaf:dashboard_stats", "group:users[posts]", "leaf:tags"]
        );
    }

    #[test]
    fn test_children_without_list_are_dropped() {
        let resources = vec![
            parent("users"),
            child("posts", "users"),
            child("drafts", "users").with_list(false),
        ];
        let plan = build_render_plan(&resources, &[]);

        assert_eq!(shape(&plan), vec!["group:users[posts]"]);
        assert_eq!(plan.omitted, vec!["drafts".to_string()]);
    }

    #[test]
    fn test_dangling_child_is_not_promoted() {
        let resources = vec![child("posts", "missing"), orphan("tags")];
        let plan = build_render_plan(&resources, &[]);

        assert_eq!(shape(&plan), vec!["leaf:tags"]);
        assert_eq!(plan.omitted, vec!["posts".to_string()]);
    }

    #[test]
    fn test_menu_false_hides_orphan() {
        let resources = vec![orphan("hidden").with_option(OPT_MENU, false), orphan("shown")];
        let plan = build_render_plan(&resources, &[]);
        assert_eq!(shape(&plan), vec!["leaf:shown"]);
    }

    #[test]
    fn test_orphan_without_list_is_omitted() {
        let resources = vec![ResourceDescriptor::new("no_list")];
        let plan = build_render_plan(&resources, &[]);
        assert!(plan.nodes.is_empty());
        assert_eq!(plan.omitted, vec!["no_list".to_string()]);
    }

    #[test]
    fn test_explicit_false_parent_flag_is_omitted() {
        let resources = vec![
            orphan("odd").with_option(OPT_IS_MENU_PARENT, false),
            child("posts", "odd"),
        ];
        let plan = build_render_plan(&resources, &[]);
        assert!(plan.nodes.is_empty());
        assert_eq!(plan.omitted, vec!["odd".to_string(), "posts".to_string()]);
    }

    #[test]
    fn test_parent_never_leaf_or_child() {
        let resources = vec![
            parent("users").with_list(true),
            parent("admin").with_option(OPT_MENU_PARENT, "users").with_list(true),
            child("posts", "users"),
        ];
        let plan = build_render_plan(&resources, &[]);

        assert_eq!(shape(&plan), vec!["group:users[posts]", "group:admin[]"]);
    }

    #[test]
    fn test_extras_appended_in_order() {
        let extras = vec![
            CustomEntry {
                key: "help".into(),
                to: "/help".into(),
                label: "Help".into(),
                icon: None,
            },
            CustomEntry {
                key: "about".into(),
                to: "/about".into(),
                label: "About".into(),
                icon: Some("info".into()),
            },
        ];
        let plan = build_render_plan(&[orphan("tags")], &extras);

        assert_eq!(shape(&plan), vec!["leaf:tags", "custom:help", "custom:about"]);
        assert_eq!(plan.nodes[2].key(), "about");
    }

    #[test]
    fn test_each_descriptor_rendered_at_most_once() {
        let resources = vec![
            parent("users"),
            child("posts", "users"),
            child("stray", "nobody"),
            orphan("tags"),
            orphan("hidden").with_option(OPT_MENU, false),
            parent("groups"),
            child("comments", "groups"),
            ResourceDescriptor::new("odd").with_option(OPT_IS_MENU_PARENT, false),
        ];
        let plan = build_render_plan(&resources, &[]);

        let mut seen: HashMap<String, usize> = HashMap::new();
        for node in &plan.nodes {
            match node {
                RenderNode::Group { parent, children } => {
                    *seen.entry(parent.name.clone()).or_default() += 1;
                    for c in children {
                        *seen.entry(c.name.clone()).or_default() += 1;
                    }
                }
                RenderNode::Leaf(r) => *seen.entry(r.name.clone()).or_default() += 1,
                RenderNode::Custom(_) => {}
            }
        }
        for name in &plan.omitted {
            *seen.entry(name.clone()).or_default() += 1;
        }

        for resource in &resources {
            assert_eq!(seen.get(&resource.name), Some(&1), "{}", resource.name);
        }
    }
}
