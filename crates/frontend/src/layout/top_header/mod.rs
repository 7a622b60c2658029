//! TopHeader component - application top bar.
//!
//! Contains the sidebar and density toggles and the application title.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader(#[prop(into)] title: String) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let toggle_dense = move |_| {
        ctx.toggle_dense();
    };

    let is_sidebar_open = move || ctx.left_open.get();
    let is_dense = move || ctx.dense.get();

    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=toggle_sidebar
                title=move || if is_sidebar_open() { "Collapse navigation" } else { "Expand navigation" }
            >
                {move || if is_sidebar_open() {
                    icon("panel-left-close")
                } else {
                    icon("panel-left-open")
                }}
            </button>
            <div class="top-header__brand">
                <span class="top-header__title">{title}</span>
            </div>
            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    class:top-header__icon-btn--active=is_dense
                    on:click=toggle_dense
                    title=move || if is_dense() { "Comfortable menu" } else { "Compact menu" }
                >
                    {icon("view-list")}
                </button>
            </div>
        </div>
    }
}
