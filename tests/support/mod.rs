pub mod in_memory_cart_provider;
pub mod in_memory_reference_store;
pub mod scripted_gateway;
