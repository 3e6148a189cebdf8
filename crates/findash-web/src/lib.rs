//! # Findash Web
//!
//! HTTP surface for the findash dashboard: an axum router serving the
//! embedded single-page frontend at `/` and one JSON endpoint per chart
//! under `/api/`. All mutable selection state lives in the page; the server
//! keeps only the immutable dataset behind [`AppState`].

pub mod error;
pub mod page;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
