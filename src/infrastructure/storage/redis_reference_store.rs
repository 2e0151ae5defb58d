use async_trait::async_trait;
use redis::{AsyncCommands, Client};

use crate::domain::reference_store::ReferenceStore;
use crate::infrastructure::config::redis::PENDING_REFERENCE_KEY;

#[derive(Clone)]
pub struct RedisReferenceStore {
	client: Client,
}

impl RedisReferenceStore {
	pub fn new(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl ReferenceStore for RedisReferenceStore {
	async fn save(
		&self,
		reference: &str,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let _: () = con
			.set(PENDING_REFERENCE_KEY, reference)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;
		Ok(())
	}

	async fn take(
		&self,
	) -> Result<Option<String>, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		// GETDEL keeps read-and-clear atomic, so two concurrent resumes
		// cannot both consume the same pending reference.
		let reference: Option<String> = con
			.get_del(PENDING_REFERENCE_KEY)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(reference)
	}
}
