use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Body of `POST /api/payment`. The capitalized field names are the wire
/// contract the storefront shell already speaks.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InitiatePaymentRequest {
	pub email:        String,
	#[serde(rename = "Volume")]
	pub volume:       Decimal,
	#[serde(rename = "Receiver")]
	pub receiver:     String,
	#[serde(rename = "Package_Type", default)]
	pub package_type: Option<String>,
	#[serde(rename = "Reference")]
	pub reference:    String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VerifyFilter {
	pub reference: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VerifyResponse {
	pub success: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CheckoutRequest {
	#[serde(rename = "cartId")]
	pub cart_id:    String,
	pub email:      String,
	#[serde(rename = "firstName")]
	pub first_name: String,
	#[serde(rename = "lastName")]
	pub last_name:  String,
	pub phone:      String,
	pub address:    String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CheckoutResponse {
	pub reference:         String,
	pub authorization_url: String,
	#[serde(with = "time::serde::rfc3339")]
	pub initiated_at:      OffsetDateTime,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TotalsFilter {
	#[serde(rename = "cartId")]
	pub cart_id: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TotalsResponse {
	#[serde(rename = "itemCount")]
	pub item_count:     u32,
	pub subtotal:       Decimal,
	#[serde(rename = "gatewayAmount")]
	pub gateway_amount: i64,
	pub currency:       String,
}

/// Query the gateway appends when redirecting back to the callback route.
/// `trxref` is sent alongside `reference` with the same value.
#[derive(Debug, Deserialize)]
pub struct CallbackFilter {
	pub reference: Option<String>,
	pub trxref:    Option<String>,
}
