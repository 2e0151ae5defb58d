pub mod callback_handler;
pub mod checkout_handler;
pub mod errors;
pub mod payment_handler;
pub mod schema;
pub mod verify_handler;
