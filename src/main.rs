use std::sync::Arc;

use storefront_checkout::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(
		storefront_checkout::infrastructure::config::settings::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}
