use derive_more::derive::{Display, Error};

/// Explicit checkout states. The flow leaves the process entirely between
/// `Redirected` and `Resuming`: the client navigates to the gateway and only
/// the stored reference survives the round trip.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum CheckoutState {
	#[display("Idle")]
	Idle,
	#[display("Validating")]
	Validating,
	#[display("Submitting({reference})")]
	Submitting { reference: String },
	#[display("Redirected({reference})")]
	Redirected { reference: String },
	#[display("Resuming({reference})")]
	Resuming { reference: String },
	#[display("Terminal({_0})")]
	Terminal(CheckoutOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum CheckoutOutcome {
	#[display("success")]
	Success,
	#[display("failure")]
	Failure,
}

impl CheckoutOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, CheckoutOutcome::Success)
	}
}

#[derive(Debug, Display, Error)]
pub enum CheckoutError {
	/// Rejected before any gateway call; `message` is shown inline.
	#[display("{message}")]
	Validation { message: String },
	/// The transaction could not be created or the pending reference could
	/// not be persisted; the client is not redirected.
	#[display("{message}")]
	Gateway { message: String },
}
