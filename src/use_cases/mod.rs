pub mod cart_totals;
pub mod checkout;
pub mod dto;
pub mod initiate_payment;
pub mod verify_payment;
