use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use storefront_checkout::domain::reference_store::ReferenceStore;

#[derive(Clone, Default)]
pub struct InMemoryReferenceStore {
	slot:         Arc<Mutex<Option<String>>>,
	failing_save: Arc<Mutex<bool>>,
}

impl InMemoryReferenceStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_pending(self, reference: &str) -> Self {
		*self.slot.lock().unwrap() = Some(reference.to_string());
		self
	}

	pub fn set_failing_save(&self, failing: bool) {
		*self.failing_save.lock().unwrap() = failing;
	}

	pub fn pending(&self) -> Option<String> {
		self.slot.lock().unwrap().clone()
	}
}

#[async_trait]
impl ReferenceStore for InMemoryReferenceStore {
	async fn save(
		&self,
		reference: &str,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		if *self.failing_save.lock().unwrap() {
			return Err(Box::new(std::io::Error::other(
				"reference store down",
			)));
		}
		*self.slot.lock().unwrap() = Some(reference.to_string());
		Ok(())
	}

	async fn take(
		&self,
	) -> Result<Option<String>, Box<dyn std::error::Error + Send>> {
		Ok(self.slot.lock().unwrap().take())
	}
}
