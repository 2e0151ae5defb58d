use serde_json::Value;
use time::OffsetDateTime;

/// Builds the per-attempt payment reference. The millisecond timestamp
/// keeps retried submissions on the same cart unique.
pub fn order_reference(cart_id: &str, now: OffsetDateTime) -> String {
	let millis = now.unix_timestamp_nanos() / 1_000_000;
	format!("order_{cart_id}_{millis}")
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransactionStatus {
	Pending,
	Success,
	Failed,
}

impl TransactionStatus {
	pub fn is_success(&self) -> bool {
		matches!(self, TransactionStatus::Success)
	}

	/// Classifies the gateway's verification envelope. Success requires the
	/// envelope status to be truthy and the transaction status to be exactly
	/// `"success"`; a missing or malformed envelope is a failed verification.
	pub fn from_verification_payload(payload: &Value) -> Self {
		let envelope_ok = payload
			.get("status")
			.and_then(Value::as_bool)
			.unwrap_or(false);
		if !envelope_ok {
			return TransactionStatus::Failed;
		}

		match payload
			.get("data")
			.and_then(|data| data.get("status"))
			.and_then(Value::as_str)
		{
			Some("success") => TransactionStatus::Success,
			Some("pending") | Some("ongoing") => TransactionStatus::Pending,
			_ => TransactionStatus::Failed,
		}
	}
}

#[derive(Debug, Clone)]
pub struct PaymentTransaction {
	pub reference:         String,
	pub authorization_url: String,
}

impl PaymentTransaction {
	/// Reads the transaction out of the gateway's initialize payload.
	/// Returns `None` when no authorization URL came back; the gateway may
	/// omit the echoed reference, in which case the generated one stands.
	pub fn from_initialize_payload(
		payload: &Value,
		generated_reference: &str,
	) -> Option<Self> {
		let data = payload.get("data")?;
		let authorization_url =
			data.get("authorization_url")?.as_str()?.to_string();
		let reference = data
			.get("reference")
			.and_then(Value::as_str)
			.unwrap_or(generated_reference)
			.to_string();

		Some(Self {
			reference,
			authorization_url,
		})
	}
}
