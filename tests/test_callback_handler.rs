use actix_web::{App, test, web};
use storefront_checkout::adapters::web::callback_handler::payment_callback;
use storefront_checkout::domain::gateway::GatewayError;
use storefront_checkout::domain::transaction::TransactionStatus;
use storefront_checkout::use_cases::cart_totals::CartTotalsUseCase;
use storefront_checkout::use_cases::checkout::CheckoutUseCase;
use storefront_checkout::use_cases::initiate_payment::InitiatePaymentUseCase;
use storefront_checkout::use_cases::verify_payment::VerifyPaymentUseCase;

mod support;

use crate::support::in_memory_cart_provider::InMemoryCartProvider;
use crate::support::in_memory_reference_store::InMemoryReferenceStore;
use crate::support::scripted_gateway::ScriptedGateway;

fn callback_routes(
	gateway: ScriptedGateway,
	reference_store: InMemoryReferenceStore,
) -> impl FnOnce(&mut web::ServiceConfig) {
	move |cfg| {
		let checkout_use_case = CheckoutUseCase::new(
			CartTotalsUseCase::new(InMemoryCartProvider::new()),
			InitiatePaymentUseCase::new(gateway.clone()),
			VerifyPaymentUseCase::new(gateway),
			reference_store,
		);
		cfg.app_data(web::Data::new(checkout_use_case)).service(
			web::resource("/payment/verify").route(web::get().to(
				payment_callback::<
					InMemoryCartProvider,
					ScriptedGateway,
					InMemoryReferenceStore,
				>,
			)),
		);
	}
}

fn location(resp: &actix_web::dev::ServiceResponse) -> &str {
	resp.headers()
		.get(actix_web::http::header::LOCATION)
		.and_then(|value| value.to_str().ok())
		.unwrap()
}

#[actix_web::test]
async fn test_callback_with_query_reference_redirects_home_on_success() {
	let gateway = ScriptedGateway::new();
	gateway.script_verify(Ok(TransactionStatus::Success));
	let reference_store =
		InMemoryReferenceStore::new().with_pending("order_cart123_1");
	let app = test::init_service(App::new().configure(callback_routes(
		gateway.clone(),
		reference_store.clone(),
	)))
	.await;

	let req = test::TestRequest::get()
		.uri("/payment/verify?reference=order_cart123_1700000000000")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status().as_u16(), 302);
	assert_eq!(location(&resp), "/?payment=success");
	assert_eq!(
		*gateway.verified_references.lock().unwrap(),
		["order_cart123_1700000000000"]
	);
	// The stored token is consumed even when the query carried the reference.
	assert_eq!(reference_store.pending(), None);
}

#[actix_web::test]
async fn test_callback_falls_back_to_stored_reference() {
	let gateway = ScriptedGateway::new();
	gateway.script_verify(Ok(TransactionStatus::Success));
	let reference_store =
		InMemoryReferenceStore::new().with_pending("order_cart123_1");
	let app = test::init_service(App::new().configure(callback_routes(
		gateway.clone(),
		reference_store.clone(),
	)))
	.await;

	let req = test::TestRequest::get().uri("/payment/verify").to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(location(&resp), "/?payment=success");
	assert_eq!(
		*gateway.verified_references.lock().unwrap(),
		["order_cart123_1"]
	);
	assert_eq!(reference_store.pending(), None);
}

#[actix_web::test]
async fn test_callback_accepts_trxref_alias() {
	let gateway = ScriptedGateway::new();
	gateway.script_verify(Ok(TransactionStatus::Success));
	let app = test::init_service(App::new().configure(callback_routes(
		gateway.clone(),
		InMemoryReferenceStore::new(),
	)))
	.await;

	let req = test::TestRequest::get()
		.uri("/payment/verify?trxref=order_cart123_1")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(location(&resp), "/?payment=success");
	assert_eq!(
		*gateway.verified_references.lock().unwrap(),
		["order_cart123_1"]
	);
}

#[actix_web::test]
async fn test_callback_redirects_to_checkout_on_failed_verification() {
	let gateway = ScriptedGateway::new();
	gateway.script_verify(Ok(TransactionStatus::Failed));
	let reference_store =
		InMemoryReferenceStore::new().with_pending("order_cart123_1");
	let app = test::init_service(App::new().configure(callback_routes(
		gateway,
		reference_store.clone(),
	)))
	.await;

	let req = test::TestRequest::get().uri("/payment/verify").to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(location(&resp), "/checkout?payment=failed");
	// Consumed exactly once, verification outcome notwithstanding.
	assert_eq!(reference_store.pending(), None);
}

#[actix_web::test]
async fn test_callback_treats_transport_failure_as_failed_payment() {
	let gateway = ScriptedGateway::new();
	gateway.script_verify(Err(GatewayError::Transport));
	let app = test::init_service(App::new().configure(callback_routes(
		gateway,
		InMemoryReferenceStore::new().with_pending("order_cart123_1"),
	)))
	.await;

	let req = test::TestRequest::get().uri("/payment/verify").to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(location(&resp), "/checkout?payment=failed");
}

#[actix_web::test]
async fn test_callback_without_reference_is_a_fresh_visit() {
	let gateway = ScriptedGateway::new();
	let app = test::init_service(App::new().configure(callback_routes(
		gateway.clone(),
		InMemoryReferenceStore::new(),
	)))
	.await;

	let req = test::TestRequest::get().uri("/payment/verify").to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status().as_u16(), 302);
	assert_eq!(location(&resp), "/checkout");
	assert!(gateway.verified_references.lock().unwrap().is_empty());
}
