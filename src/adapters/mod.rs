pub mod api_handler;
pub mod backend_client;
pub mod health_handler;
pub mod ui_handler;
