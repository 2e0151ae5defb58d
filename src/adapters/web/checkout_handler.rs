use actix_web::{HttpResponse, Responder, ResponseError, web};
use log::info;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{
	CheckoutRequest, CheckoutResponse, TotalsFilter, TotalsResponse,
};
use crate::domain::cart::CartProvider;
use crate::domain::checkout::CheckoutError;
use crate::domain::customer::CustomerInfo;
use crate::domain::gateway::PaymentGateway;
use crate::domain::reference_store::ReferenceStore;
use crate::infrastructure::config::settings::Config;
use crate::use_cases::cart_totals::CartTotalsUseCase;
use crate::use_cases::checkout::CheckoutUseCase;
use crate::use_cases::dto::{CartTotalsQuery, CheckoutCommand};

/// `POST /checkout`. On success the caller receives the authorization URL
/// and performs the full-page navigation to the gateway.
pub async fn checkout<C, G, S>(
	payload: web::Json<CheckoutRequest>,
	use_case: web::Data<CheckoutUseCase<C, G, S>>,
) -> impl Responder
where
	C: CartProvider + Clone,
	G: PaymentGateway + Clone,
	S: ReferenceStore + Clone,
{
	let command = CheckoutCommand {
		cart_id:  payload.cart_id.clone(),
		customer: CustomerInfo {
			email:      payload.email.clone(),
			first_name: payload.first_name.clone(),
			last_name:  payload.last_name.clone(),
			phone:      payload.phone.clone(),
			address:    payload.address.clone(),
		},
	};

	match use_case.submit(command).await {
		Ok(accepted) => {
			info!(
				"Checkout accepted for cart {}: {}",
				payload.cart_id, accepted.reference
			);
			HttpResponse::Ok().json(CheckoutResponse {
				reference:         accepted.reference,
				authorization_url: accepted.authorization_url,
				initiated_at:      accepted.initiated_at,
			})
		}
		Err(CheckoutError::Validation { message }) => {
			ApiError::BadClientDataError { message }.error_response()
		}
		Err(CheckoutError::Gateway { message }) => {
			ApiError::BadGatewayError { message }.error_response()
		}
	}
}

/// `GET /checkout/totals?cartId=<id>`. Always answers 200; a cart provider
/// failure already degraded to the empty totals in the use case.
pub async fn checkout_totals<C: CartProvider + Clone>(
	filter: web::Query<TotalsFilter>,
	use_case: web::Data<CartTotalsUseCase<C>>,
	config: web::Data<Config>,
) -> impl Responder {
	let totals = use_case
		.execute(CartTotalsQuery {
			cart_id: filter.cart_id.clone(),
		})
		.await;

	HttpResponse::Ok().json(TotalsResponse {
		item_count:     totals.item_count,
		subtotal:       totals.subtotal,
		gateway_amount: totals.gateway_amount,
		currency:       config.currency.clone(),
	})
}
