//! Web layer: serves the results of a finished search.
//!
//! A small read-only app: an HTML table of the trips found, a JSON API,
//! and static access to the output directory.

mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
