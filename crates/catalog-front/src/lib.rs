pub mod app;
pub mod components;
pub mod i18n;
pub mod models;
pub mod mount;
pub mod utils;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Course catalog widgets starting...");

    mount::mount_all();

    Ok(())
}
