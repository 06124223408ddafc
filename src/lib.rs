//! # question-suites
//!
//! Serves pre-authored quiz questions over HTTP.
//!
//! Each suite is a JSON file in a content directory. `math.json` holding
//! `[{"Q":"2+2?","A":"4"}]` becomes the suite `math`, reachable at
//! `GET /qs/math/0` or `GET /qs/math/random`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use question_suites::{ServerConfig, server};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::new("questions").with_port(8080);
//!     server::run(config).await
//! }
//! ```

pub mod config;
mod data;
mod models;
pub mod random;
pub mod server;

pub use config::ServerConfig;
pub use data::{LoadError, SUITE_EXTENSION, SuiteStore};
pub use models::Question;
pub use random::{IndexPicker, ThreadRngPicker};
