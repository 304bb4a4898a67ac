//! Logging Setup
//!
//! Console output goes through `wasm-logger`; the level is fixed at build time.

use log::Level;

/// Install the browser console logger
pub fn init() {
    wasm_logger::init(wasm_logger::Config::new(level_from_env()));
}

/// Level from `FOOD_ADMIN_LOG` at build time, `info` when unset or invalid
pub fn level_from_env() -> Level {
    parse_level(option_env!("FOOD_ADMIN_LOG"))
}

fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(Level::Info)
}
