#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod carousel;
pub mod content;
pub mod form;
pub mod reveal;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("couldn't initialize console logger");
    leptos::mount::hydrate_body(App);
}
