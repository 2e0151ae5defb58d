use log::warn;

use crate::domain::cart::{CartProvider, OrderTotals};
use crate::use_cases::dto::CartTotalsQuery;

#[derive(Clone)]
pub struct CartTotalsUseCase<C: CartProvider> {
	cart_provider: C,
}

impl<C: CartProvider> CartTotalsUseCase<C> {
	pub fn new(cart_provider: C) -> Self {
		Self { cart_provider }
	}

	/// Fetches the cart's line items and derives the order totals. A
	/// provider failure degrades to the empty totals so the page still
	/// renders; the orchestrator blocks checkout on an empty cart anyway.
	pub async fn execute(&self, query: CartTotalsQuery) -> OrderTotals {
		match self.cart_provider.items(&query.cart_id).await {
			Ok(items) => OrderTotals::from_items(&items),
			Err(e) => {
				warn!(
					"Failed to fetch cart items for {}: {e}",
					query.cart_id
				);
				OrderTotals::empty()
			}
		}
	}
}
