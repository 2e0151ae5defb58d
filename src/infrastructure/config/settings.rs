use serde::Deserialize;

fn default_gateway_url() -> String {
	"https://api.paystack.co".to_string()
}

fn default_currency() -> String {
	"GHS".to_string()
}

fn default_gateway_timeout_secs() -> u64 {
	10
}

/// Loaded once at startup from `APP_*` environment variables. The gateway
/// secret never appears anywhere else.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub redis_url: String,
	pub cart_api_url: String,
	#[serde(default = "default_gateway_url")]
	pub gateway_url: String,
	pub gateway_secret_key: String,
	pub public_base_url: String,
	#[serde(default = "default_currency")]
	pub currency: String,
	#[serde(default = "default_gateway_timeout_secs")]
	pub gateway_timeout_secs: u64,
	pub server_keepalive: u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}
}
