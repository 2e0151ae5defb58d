use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};

use crate::adapters::web::schema::CallbackFilter;
use crate::domain::cart::CartProvider;
use crate::domain::gateway::PaymentGateway;
use crate::domain::reference_store::ReferenceStore;
use crate::use_cases::checkout::CheckoutUseCase;

/// `GET /payment/verify` — the route the gateway redirects the client back
/// to. Runs the resume step and forwards the outcome to the rendering shell
/// as a query flag on the next page.
pub async fn payment_callback<C, G, S>(
	filter: web::Query<CallbackFilter>,
	use_case: web::Data<CheckoutUseCase<C, G, S>>,
) -> impl Responder
where
	C: CartProvider + Clone,
	G: PaymentGateway + Clone,
	S: ReferenceStore + Clone,
{
	let reference = filter.reference.clone().or_else(|| filter.trxref.clone());

	let location = match use_case.resume(reference).await {
		Some(outcome) if outcome.is_success() => "/?payment=success",
		Some(_) => "/checkout?payment=failed",
		// Fresh visit, not a payment return.
		None => "/checkout",
	};

	HttpResponse::Found()
		.insert_header((header::LOCATION, location))
		.finish()
}
