//! Collection webserver library
//!
//! The remote store contracted by the picker client: two endpoints over a
//! single JSON data file. Exposed as a library so the routes can be tested
//! without binding a socket.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
