//! Question server module.
//!
//! Serves suites over HTTP:
//!
//! - `GET /qs` lists suite names
//! - `GET /qs/{name}/random` returns a random question
//! - `GET /qs/{name}/{index}` returns the question at `index`

mod error;
mod handlers;
mod middleware;
mod server;
mod state;

pub use error::{ApiError, ErrorBody};
pub use middleware::REQUEST_ID_HEADER;
pub use server::{router, run, serve};
pub use state::{AppState, SharedState};
