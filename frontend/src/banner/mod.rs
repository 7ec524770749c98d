mod controller;
pub mod dom;
mod error;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use controller::{BannerState, ErrorBannerController};
pub use error::BannerError;
