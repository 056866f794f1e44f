//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_CONFIG_FILE, ENV_LOG_LEVEL, ENV_STORE_PATH,
};
pub use env::Config;
