use dotenvy::dotenv;
use log::error;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

pub const DEFAULT_API_URL: &str = "https://realtor.p.rapidapi.com/properties/v3/list";
pub const DEFAULT_API_HOST: &str = "realtor.p.rapidapi.com";
pub const DEFAULT_API_KEY_ENV: &str = "realtorApiKey";
pub const DEFAULT_RESPONSE_FILE: &str = "output.json";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub api_host: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// File the reporter reads listings from.
    pub report_path: String,
    /// File a fetched response body is persisted to.
    pub output_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            report_path: DEFAULT_RESPONSE_FILE.to_string(),
            output_path: DEFAULT_RESPONSE_FILE.to_string(),
        }
    }
}

pub fn create_test_config(api_url: String) -> Config {
    Config {
        api_url,
        api_host: DEFAULT_API_HOST.to_string(),
        api_key_env: "HOMEFINDER_TEST_API_KEY".to_string(),
        report_path: "tests/fixtures/output.json".to_string(),
        output_path: env::temp_dir()
            .join("homefinder-output.json")
            .to_string_lossy()
            .into_owned(),
    }
}

pub fn parse_config(raw: &str) -> Result<Config, String> {
    toml::from_str(raw).map_err(|e| e.to_string())
}

/// Loads `.env`, then the TOML file named by `CONFIG_PATH` if it is set.
/// Without `CONFIG_PATH` the built-in defaults are used.
pub fn read_config() -> Config {
    dotenv().ok();

    let config_path = match env::var(CONFIG_PATH_ENV) {
        Ok(path) => path,
        Err(_) => return Config::default(),
    };

    std::fs::read_to_string(&config_path)
        .map_err(|e| format!("{config_path}: {e}"))
        .and_then(|raw| parse_config(&raw))
        .unwrap_or_else(|err| {
            error!("failed to read config: {err}");
            std::process::exit(1);
        })
}
