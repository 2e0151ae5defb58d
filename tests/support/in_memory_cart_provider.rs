use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use storefront_checkout::domain::cart::{CartError, CartItem, CartProvider};

#[derive(Clone, Default)]
pub struct InMemoryCartProvider {
	carts:   Arc<Mutex<HashMap<String, Vec<CartItem>>>>,
	failing: Arc<Mutex<bool>>,
}

impl InMemoryCartProvider {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_cart(self, cart_id: &str, items: Vec<CartItem>) -> Self {
		self.carts
			.lock()
			.unwrap()
			.insert(cart_id.to_string(), items);
		self
	}

	pub fn set_failing(&self, failing: bool) {
		*self.failing.lock().unwrap() = failing;
	}
}

#[async_trait]
impl CartProvider for InMemoryCartProvider {
	async fn items(
		&self,
		cart_id: &str,
	) -> Result<Vec<CartItem>, Box<dyn std::error::Error + Send>> {
		if *self.failing.lock().unwrap() {
			return Err(Box::new(CartError(
				"cart provider down".to_string(),
			)));
		}

		Ok(self
			.carts
			.lock()
			.unwrap()
			.get(cart_id)
			.cloned()
			.unwrap_or_default())
	}
}
