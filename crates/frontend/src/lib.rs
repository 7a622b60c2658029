pub mod app;
pub mod host;
pub mod layout;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Mount the demo admin shell into the document body.
#[wasm_bindgen]
pub fn run_demo() {
    let resources = app::demo_resources();
    let config = app::demo_config();
    let translations = app::demo_translations();

    leptos::mount::mount_to_body(move || {
        leptos::view! {
            <app::App resources=resources config=config translations=translations />
        }
    });
}
