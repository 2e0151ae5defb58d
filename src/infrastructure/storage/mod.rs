pub mod redis_reference_store;
