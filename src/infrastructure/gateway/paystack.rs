use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde_json::{Value, json};

use crate::domain::gateway::{ChargeRequest, GatewayError, PaymentGateway};
use crate::domain::transaction::TransactionStatus;
use crate::infrastructure::config::settings::Config;

/// Paystack-shaped gateway client. The callback URL is fixed at
/// construction and points back at this service's `/payment/verify` route.
#[derive(Clone)]
pub struct PaystackGateway {
	client:       Client,
	base_url:     String,
	secret_key:   String,
	callback_url: String,
}

impl PaystackGateway {
	pub fn new(client: Client, config: &Config) -> Self {
		Self {
			client,
			base_url: config.gateway_url.trim_end_matches('/').to_string(),
			secret_key: config.gateway_secret_key.clone(),
			callback_url: format!(
				"{}/payment/verify",
				config.public_base_url.trim_end_matches('/')
			),
		}
	}

	fn initialize_body(&self, charge: &ChargeRequest) -> Value {
		json!({
			"email": charge.email,
			"amount": charge.amount_minor,
			"reference": charge.reference,
			"callback_url": self.callback_url,
			"metadata": {
				"custom_fields": [{
					"receiver": charge.receiver,
					"package_type": charge.package_type,
					"reference": charge.reference,
				}],
			},
		})
	}
}

#[async_trait]
impl PaymentGateway for PaystackGateway {
	async fn initialize_transaction(
		&self,
		charge: &ChargeRequest,
	) -> Result<Value, GatewayError> {
		let resp = self
			.client
			.post(format!("{}/transaction/initialize", self.base_url))
			.bearer_auth(&self.secret_key)
			.json(&self.initialize_body(charge))
			.send()
			.await
			.map_err(|e| {
				error!("Gateway initialize call failed: {e}");
				GatewayError::Transport
			})?;

		let status = resp.status();
		let payload: Value = resp.json().await.map_err(|e| {
			error!("Failed to decode gateway initialize response: {e}");
			GatewayError::Transport
		})?;

		if !status.is_success() {
			let message = payload
				.get("message")
				.and_then(Value::as_str)
				.unwrap_or("Payment initialization failed")
				.to_string();
			return Err(GatewayError::Rejected {
				status: status.as_u16(),
				message,
			});
		}

		Ok(payload)
	}

	async fn verify_transaction(
		&self,
		reference: &str,
	) -> Result<TransactionStatus, GatewayError> {
		let resp = self
			.client
			.get(format!("{}/transaction/verify/{reference}", self.base_url))
			.bearer_auth(&self.secret_key)
			.send()
			.await
			.map_err(|e| {
				error!("Gateway verify call failed for {reference}: {e}");
				GatewayError::Transport
			})?;

		// Paystack keeps the status envelope in error responses (unknown
		// reference and the like), so the body decides, not the HTTP code.
		let payload: Value = resp.json().await.map_err(|e| {
			error!("Failed to decode gateway verify response: {e}");
			GatewayError::Transport
		})?;

		Ok(TransactionStatus::from_verification_payload(&payload))
	}
}
