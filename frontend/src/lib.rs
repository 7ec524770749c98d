pub mod banner;
mod components;
pub mod config;

pub use banner::{BannerError, BannerState, ErrorBannerController};
pub use components::error_banner::ErrorBanner;
pub use config::{BannerConfig, ConfigError};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    let config = config::load();
    match banner::web::install(&config) {
        Ok(_) => log::debug!("error banner wired"),
        Err(err) => log::error!("error banner unavailable: {err}"),
    }
}
