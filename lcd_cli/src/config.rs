//! LcdCli Config
//!
//! The config file is TOML. Connection options live under `[connection]`;
//! extension modules can be declared under `[extensions]` as routes of the
//! LCD API, which the `call` command then exposes next to the built-in ones:
//!
//! ```toml
//! [connection]
//! api_url = "http://localhost:1317"
//! broadcast_mode = "sync"
//!
//! [extensions.staking.validators]
//! path = "/staking/validators"
//! expect = "result"
//! ```
use lcd_client::ConnectionOptions;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default location of the config file, relative to the working directory
pub const CONFIG_FILE: &str = "lcd_cli.toml";

/// API URL used when no config file is found
pub const DEFAULT_API_URL: &str = "http://localhost:1317";

/// LcdCli Configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LcdCliConfig {
    /// LCD connection options
    pub connection: ConnectionOptions,
    /// Declared extension modules: namespace -> method -> route
    #[serde(default = "no_extensions")]
    pub extensions: Value,
}

fn no_extensions() -> Value {
    Value::Object(Map::new())
}

impl Default for LcdCliConfig {
    fn default() -> Self {
        Self {
            connection: ConnectionOptions::new(DEFAULT_API_URL),
            extensions: no_extensions(),
        }
    }
}
