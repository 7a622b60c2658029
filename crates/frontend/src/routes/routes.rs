use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::TreeMenu;
use crate::layout::Shell;
use crate::shared::i18n::Translate;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
fn MainLayout(translate: Translate) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let config = ctx.config;

    let on_menu_click = Callback::new(|_: ()| log::debug!("demo: menu entry clicked"));

    view! {
        <Shell
            title="Tree Menu Demo"
            left=move || {
                let config = config.get_value();
                view! {
                    <TreeMenu
                        resources=ctx.resources
                        sidebar_open=ctx.left_open
                        dense=ctx.dense
                        has_dashboard=config.has_dashboard
                        custom_entries=config.custom_entries
                        translate=translate
                        on_menu_click=on_menu_click
                    />
                }.into_any()
            }
            center=|| view! { <Center /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes(translate: Translate) -> impl IntoView {
    view! {
        <Router>
            <MainLayout translate=translate />
        </Router>
    }
}
