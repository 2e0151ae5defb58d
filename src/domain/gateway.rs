use async_trait::async_trait;
use derive_more::derive::{Display, Error};
use serde::Serialize;
use serde_json::Value;

use crate::domain::transaction::TransactionStatus;

#[derive(Debug, Serialize, Clone)]
pub struct ChargeRequest {
	pub email:        String,
	pub amount_minor: i64,
	pub reference:    String,
	pub receiver:     String,
	pub package_type: String,
}

#[derive(Debug, Display, Error)]
pub enum GatewayError {
	/// The gateway answered with a non-2xx status and a message of its own.
	#[display("Gateway rejected the transaction: {message}")]
	Rejected { status: u16, message: String },
	/// The gateway was unreachable or its response could not be decoded.
	#[display("Gateway unreachable or returned a malformed response.")]
	Transport,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	/// Creates a transaction and returns the gateway's payload verbatim,
	/// `authorization_url` and echoed `reference` included.
	async fn initialize_transaction(
		&self,
		charge: &ChargeRequest,
	) -> Result<Value, GatewayError>;

	/// Point-in-time status lookup by reference. A gateway rejection (e.g.
	/// unknown reference) classifies as `Failed`; only transport or decode
	/// failures surface as errors.
	async fn verify_transaction(
		&self,
		reference: &str,
	) -> Result<TransactionStatus, GatewayError>;
}
