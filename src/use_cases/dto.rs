use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::customer::CustomerInfo;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CartTotalsQuery {
	pub cart_id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InitiatePaymentCommand {
	pub email:        String,
	pub amount_major: Decimal,
	pub receiver:     String,
	pub package_type: Option<String>,
	pub reference:    String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VerifyPaymentQuery {
	pub reference: String,
}

#[derive(Debug, Clone)]
pub struct CheckoutCommand {
	pub cart_id:  String,
	pub customer: CustomerInfo,
}

#[derive(Debug, Clone)]
pub struct CheckoutAccepted {
	pub reference:         String,
	pub authorization_url: String,
	pub initiated_at:      OffsetDateTime,
}
