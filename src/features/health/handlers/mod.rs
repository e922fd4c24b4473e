pub mod health_handler;

pub use health_handler::{home, test_db};
