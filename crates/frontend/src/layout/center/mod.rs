use crate::layout::global_context::AppGlobalContext;
use contracts::menu::{resolve_label, IdentityTranslator};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Content zone. Shows which resource the current path points at.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let location = use_location();

    let title = move || {
        let path = location.pathname.get();
        match ctx.resource_for_path(&path) {
            Some(resource) => resolve_label(&resource, &IdentityTranslator),
            None => "Dashboard".to_string(),
        }
    };

    view! {
        <div data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
            <h1 class="app-main__title">{title}</h1>
            <p class="app-main__path">{move || location.pathname.get()}</p>
        </div>
    }
}
