pub mod cart;
pub mod config;
pub mod gateway;
pub mod storage;
