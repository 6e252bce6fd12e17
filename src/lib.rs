#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod background;
pub mod content;
pub mod error;
pub mod logger;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    logger::init_browser_logger();
    leptos::mount::hydrate_body(App);
}
