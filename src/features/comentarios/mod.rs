//! Plot comment ("comentario") feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/comentarios/{terreno_id}` | List a plot's comments, newest-first |
//! | POST | `/comentarios` | Attach a comment to a plot |
//! | PUT | `/comentarios/{comentario_id}` | Edit a comment's text |
//! | DELETE | `/comentarios/{comentario_id}` | Remove a comment |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ComentarioService;
