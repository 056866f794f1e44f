//! API configuration constants

/// Default bind address
///
/// localhost standard port for development use.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5530";

/// Environment variable holding the bind address
pub const ENV_BIND_ADDR: &str = "LEXDENS_API_BASE_URL";

/// Environment variable holding the path of a JSON `LexdensConfig` file
pub const ENV_CONFIG_FILE: &str = "LEXDENS_CONFIG";

/// Environment variable overriding the word store path
pub const ENV_STORE_PATH: &str = "LEXDENS_STORE_PATH";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "LEXDENS_LOG_LEVEL";
