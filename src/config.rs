//! Runtime configuration defaults. CLI flags override the environment, which overrides these.

pub const DATA_DIR_ENV: &str = "LOADOUT_DATA_DIR";
pub const BIND_ENV: &str = "LOADOUT_BIND";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
