use log::{info, warn};
use time::OffsetDateTime;

use crate::domain::cart::CartProvider;
use crate::domain::checkout::{CheckoutError, CheckoutOutcome, CheckoutState};
use crate::domain::gateway::{GatewayError, PaymentGateway};
use crate::domain::reference_store::ReferenceStore;
use crate::domain::transaction::{PaymentTransaction, order_reference};
use crate::use_cases::cart_totals::CartTotalsUseCase;
use crate::use_cases::dto::{
	CartTotalsQuery, CheckoutAccepted, CheckoutCommand, InitiatePaymentCommand,
	VerifyPaymentQuery,
};
use crate::use_cases::initiate_payment::InitiatePaymentUseCase;
use crate::use_cases::verify_payment::VerifyPaymentUseCase;

const EMPTY_CART_MESSAGE: &str = "Your cart is empty";
const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";
const ZERO_AMOUNT_MESSAGE: &str = "Order total must be greater than zero";
const INITIALIZATION_FAILED_MESSAGE: &str = "Payment initialization failed";
const NO_AUTHORIZATION_URL_MESSAGE: &str = "No authorization URL received";

/// Drives the checkout state machine across the redirect boundary:
/// `submit` covers Idle → Validating → Submitting → Redirected, `resume`
/// covers Resuming → Terminal once the gateway sends the client back.
#[derive(Clone)]
pub struct CheckoutUseCase<C, G, S>
where
	C: CartProvider + Clone,
	G: PaymentGateway + Clone,
	S: ReferenceStore,
{
	cart_totals:      CartTotalsUseCase<C>,
	initiate_payment: InitiatePaymentUseCase<G>,
	verify_payment:   VerifyPaymentUseCase<G>,
	reference_store:  S,
}

impl<C, G, S> CheckoutUseCase<C, G, S>
where
	C: CartProvider + Clone,
	G: PaymentGateway + Clone,
	S: ReferenceStore + Clone,
{
	pub fn new(
		cart_totals: CartTotalsUseCase<C>,
		initiate_payment: InitiatePaymentUseCase<G>,
		verify_payment: VerifyPaymentUseCase<G>,
		reference_store: S,
	) -> Self {
		Self {
			cart_totals,
			initiate_payment,
			verify_payment,
			reference_store,
		}
	}

	/// Validates the cart and customer, creates the gateway transaction and
	/// persists the pending reference. Only once the reference is durably
	/// stored is the caller handed the authorization URL to navigate to;
	/// every failure lands back in Idle with a message and no stored state.
	pub async fn submit(
		&self,
		command: CheckoutCommand,
	) -> Result<CheckoutAccepted, CheckoutError> {
		info!("Checkout {}: {}", command.cart_id, CheckoutState::Validating);

		let totals = self
			.cart_totals
			.execute(CartTotalsQuery {
				cart_id: command.cart_id.clone(),
			})
			.await;

		if totals.item_count == 0 {
			return Err(self.rejected(&command.cart_id, EMPTY_CART_MESSAGE));
		}
		if !command.customer.is_complete() {
			return Err(self.rejected(&command.cart_id, MISSING_FIELDS_MESSAGE));
		}
		if !totals.is_payable() {
			return Err(self.rejected(&command.cart_id, ZERO_AMOUNT_MESSAGE));
		}

		let initiated_at = OffsetDateTime::now_utc();
		let reference = order_reference(&command.cart_id, initiated_at);
		info!(
			"Checkout {}: {}",
			command.cart_id,
			CheckoutState::Submitting {
				reference: reference.clone(),
			}
		);

		let payload = self
			.initiate_payment
			.execute(InitiatePaymentCommand {
				email:        command.customer.email.clone(),
				amount_major: totals.subtotal,
				receiver:     command.customer.receiver_name(),
				package_type: None,
				reference:    reference.clone(),
			})
			.await
			.map_err(|e| {
				warn!("Checkout {}: initiation failed: {e}", command.cart_id);
				CheckoutError::Gateway {
					message: match e {
						GatewayError::Rejected { message, .. } => message,
						GatewayError::Transport => {
							INITIALIZATION_FAILED_MESSAGE.to_string()
						}
					},
				}
			})?;

		let transaction =
			PaymentTransaction::from_initialize_payload(&payload, &reference)
				.ok_or_else(|| {
					warn!(
						"Checkout {}: payload carried no authorization URL",
						command.cart_id
					);
					CheckoutError::Gateway {
						message: NO_AUTHORIZATION_URL_MESSAGE.to_string(),
					}
				})?;

		// Without the stored reference the return trip cannot resume, so a
		// store failure must block the redirect.
		self.reference_store
			.save(&transaction.reference)
			.await
			.map_err(|e| {
				warn!(
					"Checkout {}: failed to store pending reference: {e}",
					command.cart_id
				);
				CheckoutError::Gateway {
					message: INITIALIZATION_FAILED_MESSAGE.to_string(),
				}
			})?;

		info!(
			"Checkout {}: {}",
			command.cart_id,
			CheckoutState::Redirected {
				reference: transaction.reference.clone(),
			}
		);

		Ok(CheckoutAccepted {
			reference: transaction.reference,
			authorization_url: transaction.authorization_url,
			initiated_at,
		})
	}

	/// Runs on load of the return route. The stored reference is consumed
	/// (read and cleared) before anything else so a stale token can never be
	/// verified twice; `None` means this was a fresh visit, not a payment
	/// return, and the state stays Idle.
	pub async fn resume(
		&self,
		query_reference: Option<String>,
	) -> Option<CheckoutOutcome> {
		let stored = match self.reference_store.take().await {
			Ok(stored) => stored,
			Err(e) => {
				warn!("Failed to read pending reference: {e}");
				None
			}
		};

		let reference = query_reference.or(stored)?;
		info!(
			"Checkout resume: {}",
			CheckoutState::Resuming {
				reference: reference.clone(),
			}
		);

		let outcome = match self
			.verify_payment
			.execute(VerifyPaymentQuery {
				reference: reference.clone(),
			})
			.await
		{
			Ok(status) if status.is_success() => CheckoutOutcome::Success,
			Ok(status) => {
				warn!("Verification of {reference} came back {status:?}");
				CheckoutOutcome::Failure
			}
			Err(e) => {
				warn!("Verification of {reference} failed: {e}");
				CheckoutOutcome::Failure
			}
		};

		info!("Checkout resume: {}", CheckoutState::Terminal(outcome));
		Some(outcome)
	}

	fn rejected(&self, cart_id: &str, message: &str) -> CheckoutError {
		info!("Checkout {cart_id}: rejected in validation: {message}");
		CheckoutError::Validation {
			message: message.to_string(),
		}
	}
}
