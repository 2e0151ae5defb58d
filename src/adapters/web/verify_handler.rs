use actix_web::{HttpResponse, Responder, web};
use log::warn;

use crate::adapters::web::schema::{VerifyFilter, VerifyResponse};
use crate::domain::gateway::{GatewayError, PaymentGateway};
use crate::use_cases::dto::VerifyPaymentQuery;
use crate::use_cases::verify_payment::VerifyPaymentUseCase;

/// `GET /api/verify?reference=<ref>`. The body is always
/// `{ success: bool }`; gateway error detail never crosses this boundary.
pub async fn verify_payment<G: PaymentGateway + Clone>(
	filter: web::Query<VerifyFilter>,
	use_case: web::Data<VerifyPaymentUseCase<G>>,
) -> impl Responder {
	let Some(reference) = filter.reference.clone() else {
		return HttpResponse::BadRequest()
			.json(VerifyResponse { success: false });
	};

	match use_case.execute(VerifyPaymentQuery { reference }).await {
		Ok(status) if status.is_success() => {
			HttpResponse::Ok().json(VerifyResponse { success: true })
		}
		Ok(_) => {
			HttpResponse::BadRequest().json(VerifyResponse { success: false })
		}
		Err(GatewayError::Rejected { .. }) => {
			HttpResponse::BadRequest().json(VerifyResponse { success: false })
		}
		Err(GatewayError::Transport) => {
			warn!("Verification lookup failed for {:?}", filter.reference);
			HttpResponse::InternalServerError()
				.json(VerifyResponse { success: false })
		}
	}
}
