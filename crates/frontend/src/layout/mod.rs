pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +---------------------------+
/// |         TopHeader         |
/// +---------------------------+
/// |  Sidebar  |    Content    |
/// |   (Left)  |   (Center)    |
/// +---------------------------+
/// ```
#[component]
pub fn Shell<L, C>(#[prop(into)] title: String, left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader title=title />

            <div class="app-body">
                // Left sidebar - uses ctx.left_open for its width
                <left::Left>
                    {left()}
                </left::Left>

                {center()}
            </div>
        </div>
    }
}
