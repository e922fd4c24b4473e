//! Liveness and store connectivity checks.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Static liveness message |
//! | GET | `/test-db` | Trivial query against the store, reports its time |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::HealthService;
