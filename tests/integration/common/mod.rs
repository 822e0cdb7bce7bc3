pub mod fake_backend;
pub mod test_server;
