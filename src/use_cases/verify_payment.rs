use crate::domain::gateway::{GatewayError, PaymentGateway};
use crate::domain::transaction::TransactionStatus;
use crate::use_cases::dto::VerifyPaymentQuery;

#[derive(Clone)]
pub struct VerifyPaymentUseCase<G: PaymentGateway> {
	gateway: G,
}

impl<G: PaymentGateway> VerifyPaymentUseCase<G> {
	pub fn new(gateway: G) -> Self {
		Self { gateway }
	}

	/// Single point-in-time status lookup. Safe to repeat: once the gateway
	/// transaction is terminal the same reference yields the same answer.
	pub async fn execute(
		&self,
		query: VerifyPaymentQuery,
	) -> Result<TransactionStatus, GatewayError> {
		self.gateway.verify_transaction(&query.reference).await
	}
}
