#[macro_use]
extern crate rust_i18n;

// Messages and card labels for both pages.
i18n!("locales", fallback = "en");

pub mod config;
pub mod error;
pub mod flight;
pub mod http;
pub mod logging;
pub mod ordering;
pub mod render;

#[cfg(test)]
pub(crate) mod testing;

const fn unwrap_or_cargo_version(opt: Option<&'static str>) -> &'static str {
    match opt {
        Some(val) => val,
        None => env!("CARGO_PKG_VERSION"),
    }
}

/// Build version, overridable at compile time through `SKYBOARD_VERSION`.
pub const VERSION: &str = unwrap_or_cargo_version(option_env!("SKYBOARD_VERSION"));
