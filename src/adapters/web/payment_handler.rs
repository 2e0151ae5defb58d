use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, ResponseError, web};
use log::{info, warn};

use crate::adapters::web::errors::{ApiError, ErrorResponse};
use crate::adapters::web::schema::InitiatePaymentRequest;
use crate::domain::gateway::{GatewayError, PaymentGateway};
use crate::use_cases::dto::InitiatePaymentCommand;
use crate::use_cases::initiate_payment::InitiatePaymentUseCase;

/// `POST /api/payment`. Forwards the gateway's transaction payload verbatim
/// on success; a gateway rejection is forwarded with the gateway's own
/// status code and message.
pub async fn initiate_payment<G: PaymentGateway + Clone>(
	payload: web::Json<InitiatePaymentRequest>,
	use_case: web::Data<InitiatePaymentUseCase<G>>,
) -> impl Responder {
	let command = InitiatePaymentCommand {
		email:        payload.email.clone(),
		amount_major: payload.volume,
		receiver:     payload.receiver.clone(),
		package_type: payload.package_type.clone(),
		reference:    payload.reference.clone(),
	};

	match use_case.execute(command).await {
		Ok(transaction_payload) => {
			info!("Transaction initialized: {}", payload.reference);
			HttpResponse::Ok().json(transaction_payload)
		}
		Err(GatewayError::Rejected { status, message }) => {
			warn!(
				"Gateway rejected transaction {} with status {status}: \
				 {message}",
				payload.reference
			);
			HttpResponse::build(
				StatusCode::from_u16(status)
					.unwrap_or(StatusCode::BAD_GATEWAY),
			)
			.json(ErrorResponse { message })
		}
		Err(GatewayError::Transport) => {
			warn!(
				"Could not reach the gateway for transaction {}",
				payload.reference
			);
			ApiError::InternalServerError.error_response()
		}
	}
}
