use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

use crate::domain::gateway::{ChargeRequest, GatewayError, PaymentGateway};
use crate::use_cases::dto::InitiatePaymentCommand;

pub const DEFAULT_PACKAGE_TYPE: &str = "Shopping Cart";

#[derive(Clone)]
pub struct InitiatePaymentUseCase<G: PaymentGateway> {
	gateway: G,
}

impl<G: PaymentGateway> InitiatePaymentUseCase<G> {
	pub fn new(gateway: G) -> Self {
		Self { gateway }
	}

	/// Creates a gateway transaction for the given major-unit amount and
	/// returns the gateway's payload verbatim. The amount is truncated to
	/// whole minor units; an amount too large for i64 degrades to 0 and is
	/// rejected by the gateway with its own message.
	pub async fn execute(
		&self,
		command: InitiatePaymentCommand,
	) -> Result<Value, GatewayError> {
		let charge = ChargeRequest {
			email:        command.email,
			amount_minor: to_minor_units(command.amount_major),
			reference:    command.reference,
			receiver:     command.receiver,
			package_type: command
				.package_type
				.unwrap_or_else(|| DEFAULT_PACKAGE_TYPE.to_string()),
		};

		self.gateway.initialize_transaction(&charge).await
	}
}

fn to_minor_units(amount_major: Decimal) -> i64 {
	amount_major
		.checked_mul(Decimal::from(100))
		.and_then(|minor| minor.trunc().to_i64())
		.unwrap_or(0)
}
