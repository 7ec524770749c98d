pub mod error_banner;
