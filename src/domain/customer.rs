use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CustomerInfo {
	pub email:      String,
	pub first_name: String,
	pub last_name:  String,
	pub phone:      String,
	pub address:    String,
}

impl CustomerInfo {
	/// All fields are required; whitespace-only values count as blank.
	pub fn is_complete(&self) -> bool {
		![
			&self.email,
			&self.first_name,
			&self.last_name,
			&self.phone,
			&self.address,
		]
		.iter()
		.any(|field| field.trim().is_empty())
	}

	pub fn receiver_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}
}
