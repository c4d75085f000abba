#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod celebrate;
mod config;
mod constants;
mod dom;
mod errors;
mod events;
mod page;
mod parallax;
mod sparkle;

use config::PageConfig;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("great-day-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let page = dom::WebPage::from_window()?;
    let config = PageConfig::default();

    events::wire_celebrate_click(&page, &config);
    events::wire_parallax_handlers(&page, &config);
    Ok(())
}
