pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;

use crate::adapters::web::callback_handler::payment_callback;
use crate::adapters::web::checkout_handler::{checkout, checkout_totals};
use crate::adapters::web::payment_handler::initiate_payment;
use crate::adapters::web::verify_handler::verify_payment;
use crate::infrastructure::cart::http_cart_provider::HttpCartProvider;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::gateway::paystack::PaystackGateway;
use crate::infrastructure::storage::redis_reference_store::RedisReferenceStore;
use crate::use_cases::cart_totals::CartTotalsUseCase;
use crate::use_cases::checkout::CheckoutUseCase;
use crate::use_cases::initiate_payment::InitiatePaymentUseCase;
use crate::use_cases::verify_payment::VerifyPaymentUseCase;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::init();

	let redis_client = redis::Client::open(config.redis_url.clone())
		.expect("Invalid Redis URL");
	let http_client = reqwest::Client::builder()
		.timeout(Duration::from_secs(config.gateway_timeout_secs))
		.build()
		.expect("Failed to build HTTP client");

	let gateway = PaystackGateway::new(http_client.clone(), &config);
	let cart_provider =
		HttpCartProvider::new(http_client, config.cart_api_url.clone());
	let reference_store = RedisReferenceStore::new(redis_client);

	let cart_totals_use_case = CartTotalsUseCase::new(cart_provider);
	let initiate_payment_use_case =
		InitiatePaymentUseCase::new(gateway.clone());
	let verify_payment_use_case = VerifyPaymentUseCase::new(gateway);
	let checkout_use_case = CheckoutUseCase::new(
		cart_totals_use_case.clone(),
		initiate_payment_use_case.clone(),
		verify_payment_use_case.clone(),
		reference_store,
	);

	let server_keepalive = config.server_keepalive;

	info!("Starting checkout server on 0.0.0.0:9999...");
	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(config.as_ref().clone()))
			.app_data(web::Data::new(cart_totals_use_case.clone()))
			.app_data(web::Data::new(initiate_payment_use_case.clone()))
			.app_data(web::Data::new(verify_payment_use_case.clone()))
			.app_data(web::Data::new(checkout_use_case.clone()))
			.service(web::resource("/api/payment").route(
				web::post().to(initiate_payment::<PaystackGateway>),
			))
			.service(web::resource("/api/verify").route(
				web::get().to(verify_payment::<PaystackGateway>),
			))
			.service(web::resource("/checkout").route(web::post().to(
				checkout::<HttpCartProvider, PaystackGateway, RedisReferenceStore>,
			)))
			.service(web::resource("/checkout/totals").route(
				web::get().to(checkout_totals::<HttpCartProvider>),
			))
			.service(web::resource("/payment/verify").route(web::get().to(
				payment_callback::<
					HttpCartProvider,
					PaystackGateway,
					RedisReferenceStore,
				>,
			)))
	})
	.keep_alive(Duration::from_secs(server_keepalive))
	.bind(("0.0.0.0", 9999))?
	.run()
	.await
}
