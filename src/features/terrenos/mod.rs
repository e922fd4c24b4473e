//! Land plot ("terreno") feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/terrenos` | List plots, newest-first |
//! | POST | `/terrenos` | Register a plot |
//! | PUT | `/terrenos/{terreno_id}` | Rename a plot |
//! | DELETE | `/terrenos/{terreno_id}` | Remove a plot |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TerrenoService;
