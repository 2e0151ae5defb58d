pub mod http_cart_provider;
