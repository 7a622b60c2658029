//! TreeMenu - two-level navigation built from the host's resource list.
//!
//! Parents (`options.isMenuParent`) become expandable groups holding the
//! resources that name them in `options.menuParent`; resources with neither
//! become top-level links. The group containing the resource under the
//! current path is shown expanded without touching its stored flag.

use super::menu_entry::{MenuGroup, MenuItemLink};
use crate::shared::i18n::{identity_translator, Translate};
use crate::shared::icons::{resolve_icon_key, IconRole};
use contracts::menu::{
    active_parent, build_render_plan, dashboard_label, resolve_label, CustomEntry,
    ExpansionState, RenderNode, ResourceDescriptor,
};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub const DASHBOARD_PATH: &str = "/";

/// Everything one render of a node needs besides the node itself.
#[derive(Clone, Copy)]
struct NodeContext {
    expansion: RwSignal<ExpansionState>,
    active: Memo<Option<String>>,
    sidebar_open: Signal<bool>,
    dense: Signal<bool>,
    translate: Translate,
    on_menu_click: Option<Callback<()>>,
}

impl NodeContext {
    fn label(&self, resource: &ResourceDescriptor) -> String {
        let translate = self.translate;
        let translator = move |key: &str| translate.run(key.to_string());
        resolve_label(resource, &translator)
    }

    fn dashboard_label(&self) -> String {
        let translate = self.translate;
        let translator = move |key: &str| translate.run(key.to_string());
        dashboard_label(&translator)
    }

    fn toggle(&self, parent: &str) {
        self.expansion.update(|state| *state = state.toggled(parent));
        log::debug!(
            "tree menu: toggled '{}' -> {}",
            parent,
            self.expansion.with_untracked(|s| s.is_expanded(parent))
        );
    }
}

/// Name of the group holding the resource under `pathname`.
pub fn active_group(
    resources: Signal<Vec<ResourceDescriptor>>,
    pathname: Signal<String>,
) -> Memo<Option<String>> {
    Memo::new(move |_| {
        let path = pathname.get();
        resources.with(|list| active_parent(list, &path).map(str::to_string))
    })
}

#[component]
pub fn TreeMenu(
    /// Resources declared by the host, in declaration order.
    #[prop(into)]
    resources: Signal<Vec<ResourceDescriptor>>,
    /// Sidebar visibility; only affects presentation.
    #[prop(into)]
    sidebar_open: Signal<bool>,
    #[prop(into, default = false.into())] dense: Signal<bool>,
    /// Current navigation path; read from the router when absent.
    #[prop(optional, into)]
    pathname: Option<Signal<String>>,
    /// Render a dashboard link above the resources.
    #[prop(optional)]
    has_dashboard: bool,
    /// Host entries appended after the resources.
    #[prop(optional)]
    custom_entries: Vec<CustomEntry>,
    /// Label translation; unresolved keys must be returned verbatim.
    #[prop(optional)]
    translate: Option<Translate>,
    /// Called whenever any entry is activated.
    #[prop(optional)]
    on_menu_click: Option<Callback<()>>,
) -> impl IntoView {
    let pathname = pathname.unwrap_or_else(|| use_location().pathname.into());
    let translate = translate.unwrap_or_else(identity_translator);

    // Fresh mount: every parent collapsed.
    let expansion = RwSignal::new(resources.with_untracked(|list| ExpansionState::seed(list)));

    Effect::new(move |_| {
        let next = resources.with(|list| expansion.with_untracked(|state| state.reseed(list)));
        if expansion.with_untracked(|state| state != &next) {
            log::debug!("tree menu: groups {:?}", next.names().collect::<Vec<_>>());
            expansion.set(next);
        }
    });

    let custom_entries = StoredValue::new(custom_entries);
    let plan = Memo::new(move |_| {
        let plan = resources.with(|list| {
            custom_entries.with_value(|extras| build_render_plan(list, extras))
        });
        log::debug!(
            "tree menu: {} groups, {} links, omitted {:?}",
            plan.group_count(),
            plan.leaf_count(),
            plan.omitted
        );
        plan
    });

    let active = active_group(resources, pathname);

    let ctx = NodeContext {
        expansion,
        active,
        sidebar_open,
        dense,
        translate,
        on_menu_click,
    };

    view! {
        <nav class="tree-menu">
            {has_dashboard.then(|| {
                view! {
                    <MenuItemLink
                        to=DASHBOARD_PATH
                        label=ctx.dashboard_label()
                        icon_key="dashboard"
                        sidebar_is_open=sidebar_open
                        dense=dense
                        on_click=on_menu_click
                    />
                }
            })}
            {move || {
                plan.get()
                    .nodes
                    .into_iter()
                    .map(|node| render_node(node, ctx))
                    .collect_view()
            }}
        </nav>
    }
}

fn render_node(node: RenderNode, ctx: NodeContext) -> AnyView {
    let key = node.key().to_string();
    let entry = match node {
        RenderNode::Group { parent, children } => render_group(parent, children, ctx),
        RenderNode::Leaf(resource) => render_link(&resource, ctx),
        RenderNode::Custom(entry) => {
            let icon_key = resolve_icon_key(entry.icon.as_deref(), IconRole::Link).to_string();
            view! {
                <MenuItemLink
                    to=entry.to
                    label=entry.label
                    icon_key=icon_key
                    sidebar_is_open=ctx.sidebar_open
                    dense=ctx.dense
                    on_click=ctx.on_menu_click
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="tree-menu__node" data-menu-key=key>
            {entry}
        </div>
    }
    .into_any()
}

fn render_link(resource: &ResourceDescriptor, ctx: NodeContext) -> AnyView {
    let icon_key = resolve_icon_key(resource.icon.as_deref(), IconRole::Link).to_string();
    view! {
        <MenuItemLink
            to=resource.path()
            label=ctx.label(resource)
            icon_key=icon_key
            sidebar_is_open=ctx.sidebar_open
            dense=ctx.dense
            on_click=ctx.on_menu_click
        />
    }
    .into_any()
}

fn render_group(
    parent: ResourceDescriptor,
    children: Vec<ResourceDescriptor>,
    ctx: NodeContext,
) -> AnyView {
    let name = StoredValue::new(parent.name.clone());
    let icon_key = resolve_icon_key(parent.icon.as_deref(), IconRole::GroupHeader).to_string();
    let children = StoredValue::new(children);

    let is_open = Signal::derive(move || {
        let active = ctx.active.get();
        name.with_value(|name| {
            ctx.expansion
                .with(|state| state.renders_expanded(name, active.as_deref()))
        })
    });
    let handle_toggle = Callback::new(move |_: ()| name.with_value(|name| ctx.toggle(name)));

    view! {
        <MenuGroup
            label=ctx.label(&parent)
            icon_key=icon_key
            is_open=is_open
            sidebar_is_open=ctx.sidebar_open
            dense=ctx.dense
            handle_toggle=handle_toggle
        >
            {move || {
                children.with_value(|list| {
                    list.iter().map(|child| render_link(child, ctx)).collect_view()
                })
            }}
        </MenuGroup>
    }
    .into_any()
}
