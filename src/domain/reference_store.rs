use async_trait::async_trait;

/// Single-slot durable storage for the pending payment reference. The
/// reference is the only state that survives the redirect to the gateway,
/// so `save` must land before the client navigates away.
#[async_trait]
pub trait ReferenceStore: Send + Sync + 'static {
	async fn save(
		&self,
		reference: &str,
	) -> Result<(), Box<dyn std::error::Error + Send>>;

	/// Reads and clears the stored reference in one step. A second take
	/// (reload, duplicate tab) finds nothing and resumes as a fresh visit.
	async fn take(
		&self,
	) -> Result<Option<String>, Box<dyn std::error::Error + Send>>;
}
