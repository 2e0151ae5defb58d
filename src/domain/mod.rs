pub mod cart;
pub mod checkout;
pub mod customer;
pub mod gateway;
pub mod reference_store;
pub mod transaction;
