//! Menu entries: a single resource link and an expandable group.
//!
//! Pure presentation. The group does not own its expanded flag; it renders
//! `is_open` and reports clicks through `handle_toggle`.

use crate::shared::icons::{expand_indicator_key, icon};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Tooltip, TooltipPosition};

/// CSS classes of an entry row.
pub fn entry_class(dense: bool, is_open: bool) -> String {
    let mut class = String::from("tree-menu__item");
    if dense {
        class.push_str(" tree-menu__item--dense");
    }
    if is_open {
        class.push_str(" tree-menu__item--open");
    }
    class
}

/// Indentation modifier of a group's child list.
pub fn children_class(sidebar_is_open: bool) -> &'static str {
    if sidebar_is_open {
        "tree-menu__children tree-menu__children--sidebar-open"
    } else {
        "tree-menu__children tree-menu__children--sidebar-closed"
    }
}

/// Navigation link to a resource (or any host route).
///
/// With the sidebar closed only the icon is visible, the label moves into a
/// tooltip.
#[component]
pub fn MenuItemLink(
    #[prop(into)] to: String,
    #[prop(into)] label: String,
    #[prop(into)] icon_key: String,
    #[prop(into)] sidebar_is_open: Signal<bool>,
    #[prop(into)] dense: Signal<bool>,
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let label = StoredValue::new(label);
    let to = StoredValue::new(to);
    let icon_key = StoredValue::new(icon_key);

    let link = move || {
        view! {
            <div
                class=move || entry_class(dense.get(), false)
                on:click=move |_| {
                    log::debug!("menu link activated: {}", to.get_value());
                    if let Some(cb) = on_click {
                        cb.run(());
                    }
                }
            >
                <A href=to.get_value()>
                    <span class="tree-menu__icon">{icon(&icon_key.get_value())}</span>
                    <Show when=move || sidebar_is_open.get()>
                        <span class="tree-menu__label">{label.get_value()}</span>
                    </Show>
                </A>
            </div>
        }
    };

    view! {
        {move || if sidebar_is_open.get() {
            link().into_any()
        } else {
            view! {
                <Tooltip content=label.get_value() position=TooltipPosition::Right>
                    {link()}
                </Tooltip>
            }.into_any()
        }}
    }
}

/// Expandable group: header plus a collapsible list of children.
///
/// The indicator shows `expand-more` while open and `expand-less` while
/// closed. Children are unmounted while the group is closed.
#[component]
pub fn MenuGroup(
    #[prop(into)] label: String,
    #[prop(into)] icon_key: String,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] sidebar_is_open: Signal<bool>,
    #[prop(into)] dense: Signal<bool>,
    handle_toggle: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let label = StoredValue::new(label);
    let icon_key = StoredValue::new(icon_key);

    let header = move || {
        view! {
            <div
                class=move || format!("{} tree-menu__header", entry_class(dense.get(), is_open.get()))
                role="button"
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                on:click=move |_| handle_toggle.run(())
            >
                <span class="tree-menu__icon">{icon(&icon_key.get_value())}</span>
                <span class="tree-menu__label tree-menu__group-name">{label.get_value()}</span>
                <span class="tree-menu__icon tree-menu__indicator">
                    {move || icon(expand_indicator_key(is_open.get()))}
                </span>
            </div>
        }
    };

    view! {
        <div class="tree-menu__group">
            {move || if sidebar_is_open.get() || is_open.get() {
                header().into_any()
            } else {
                view! {
                    <Tooltip content=label.get_value() position=TooltipPosition::Right>
                        {header()}
                    </Tooltip>
                }.into_any()
            }}
            <Show when=move || is_open.get()>
                <div class=move || children_class(sidebar_is_open.get())>
                    {children()}
                </div>
            </Show>
        </div>
    }
}
