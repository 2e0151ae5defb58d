use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CartItem {
	pub item_id:    String,
	pub unit_price: Decimal,
	pub quantity:   u32,
}

impl CartItem {
	/// Price times quantity. The provider is an external service, so a
	/// product too large for `Decimal` degrades to zero instead of aborting
	/// the request.
	pub fn line_total(&self) -> Decimal {
		self.unit_price
			.checked_mul(Decimal::from(self.quantity))
			.unwrap_or(Decimal::ZERO)
	}
}

/// Totals derived from the cart's line items. `gateway_amount` is the
/// subtotal in minor currency units (subtotal * 100, rounded half away
/// from zero), the only representation the gateway accepts.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct OrderTotals {
	pub item_count:     u32,
	pub subtotal:       Decimal,
	pub gateway_amount: i64,
}

impl OrderTotals {
	pub fn empty() -> Self {
		Self {
			item_count:     0,
			subtotal:       Decimal::ZERO,
			gateway_amount: 0,
		}
	}

	pub fn from_items(items: &[CartItem]) -> Self {
		let item_count = items
			.iter()
			.fold(0u32, |sum, item| sum.saturating_add(item.quantity));
		let subtotal = items
			.iter()
			.try_fold(Decimal::ZERO, |sum, item| {
				sum.checked_add(item.line_total())
			})
			.unwrap_or(Decimal::ZERO);
		let gateway_amount = subtotal
			.checked_mul(Decimal::from(100))
			.map(|minor| {
				minor.round_dp_with_strategy(
					0,
					RoundingStrategy::MidpointAwayFromZero,
				)
			})
			.and_then(|minor| minor.to_i64())
			.unwrap_or(0);

		Self {
			item_count,
			subtotal,
			gateway_amount,
		}
	}

	pub fn is_payable(&self) -> bool {
		self.gateway_amount > 0
	}
}

#[derive(Debug)]
pub struct CartError(pub String);

impl fmt::Display for CartError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Cart provider error: {}", self.0)
	}
}

impl Error for CartError {}

#[async_trait]
pub trait CartProvider: Send + Sync + 'static {
	async fn items(
		&self,
		cart_id: &str,
	) -> Result<Vec<CartItem>, Box<dyn std::error::Error + Send>>;
}
