use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use storefront_checkout::domain::gateway::{
	ChargeRequest, GatewayError, PaymentGateway,
};
use storefront_checkout::domain::transaction::TransactionStatus;

/// Gateway double answering from scripted responses, recording every call.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
	initialize_responses: Arc<Mutex<VecDeque<Result<Value, GatewayError>>>>,
	verify_responses:
		Arc<Mutex<VecDeque<Result<TransactionStatus, GatewayError>>>>,
	pub charges:             Arc<Mutex<Vec<ChargeRequest>>>,
	pub verified_references: Arc<Mutex<Vec<String>>>,
}

impl ScriptedGateway {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn script_initialize(&self, response: Result<Value, GatewayError>) {
		self.initialize_responses
			.lock()
			.unwrap()
			.push_back(response);
	}

	pub fn script_verify(
		&self,
		response: Result<TransactionStatus, GatewayError>,
	) {
		self.verify_responses.lock().unwrap().push_back(response);
	}

	/// The payload Paystack answers a successful initialize with, trimmed
	/// to the fields the flow reads.
	pub fn initialize_payload(
		authorization_url: &str,
		reference: Option<&str>,
	) -> Value {
		let mut data = json!({
			"authorization_url": authorization_url,
			"access_code": "access_code_test",
		});
		if let Some(reference) = reference {
			data["reference"] = json!(reference);
		}
		json!({
			"status": true,
			"message": "Authorization URL created",
			"data": data,
		})
	}
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
	async fn initialize_transaction(
		&self,
		charge: &ChargeRequest,
	) -> Result<Value, GatewayError> {
		self.charges.lock().unwrap().push(charge.clone());
		self.initialize_responses
			.lock()
			.unwrap()
			.pop_front()
			.expect("no scripted initialize response left")
	}

	async fn verify_transaction(
		&self,
		reference: &str,
	) -> Result<TransactionStatus, GatewayError> {
		self.verified_references
			.lock()
			.unwrap()
			.push(reference.to_string());
		self.verify_responses
			.lock()
			.unwrap()
			.pop_front()
			.expect("no scripted verify response left")
	}
}
