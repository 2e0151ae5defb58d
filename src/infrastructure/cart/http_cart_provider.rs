use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::cart::{CartError, CartItem, CartProvider};

/// Cart rows can arrive partially populated while the storefront is still
/// assembling them; missing prices and quantities count as zero.
#[derive(Debug, Deserialize)]
struct CartItemsPayload {
	#[serde(default)]
	items: Vec<CartItemRow>,
}

#[derive(Debug, Deserialize)]
struct CartItemRow {
	item_id:    Option<i64>,
	qty:        Option<u32>,
	#[serde(rename = "itemPrice")]
	item_price: Option<CartItemPrice>,
}

#[derive(Debug, Deserialize)]
struct CartItemPrice {
	final_price: Option<Decimal>,
}

impl CartItemRow {
	fn into_item(self) -> CartItem {
		CartItem {
			item_id:    self
				.item_id
				.map(|id| id.to_string())
				.unwrap_or_default(),
			unit_price: self
				.item_price
				.and_then(|price| price.final_price)
				.unwrap_or(Decimal::ZERO),
			quantity:   self.qty.unwrap_or(0),
		}
	}
}

#[derive(Clone)]
pub struct HttpCartProvider {
	client:   Client,
	base_url: String,
}

impl HttpCartProvider {
	pub fn new(client: Client, base_url: String) -> Self {
		Self {
			client,
			base_url: base_url.trim_end_matches('/').to_string(),
		}
	}
}

#[async_trait]
impl CartProvider for HttpCartProvider {
	async fn items(
		&self,
		cart_id: &str,
	) -> Result<Vec<CartItem>, Box<dyn std::error::Error + Send>> {
		let resp = self
			.client
			.get(format!("{}/carts/{cart_id}/items", self.base_url))
			.send()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		if !resp.status().is_success() {
			return Err(Box::new(CartError(format!(
				"cart provider answered {}",
				resp.status()
			))));
		}

		let payload: CartItemsPayload = resp
			.json()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(payload
			.items
			.into_iter()
			.map(CartItemRow::into_item)
			.collect())
	}
}
