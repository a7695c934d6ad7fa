pub mod handlers;
pub mod router;
pub mod scalar_config;
