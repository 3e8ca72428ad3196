//! status_gate library: load a single URL and classify every response.
//!
//! Each iteration issues one GET against the target and records exactly one
//! of three checks:
//! - `accepted`: HTTP 200
//! - `rejected`: HTTP 503 (the server shed the request)
//! - `other`: any other status, or no response at all
//!
//! # Example
//!
//! ```no_run
//! use status_gate::{run_load, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     host: Some("http://127.0.0.1:8080/".to_string()),
//!     vus: 50,
//!     duration_seconds: Some(30),
//!     ..Default::default()
//! };
//!
//! let report = run_load(config).await?;
//! println!("{} iterations: {} accepted, {} rejected, {} other",
//!          report.iterations,
//!          report.passes("accepted"),
//!          report.passes("rejected"),
//!          report.passes("other"));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Running a load requires a Tokio runtime. Classification itself
//! ([`classify`]) is a plain synchronous function.

pub mod analysis;
pub mod app;
pub mod classify;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod metrics;
pub mod run;

// Re-export public API
pub use classify::{classify, Check, Classification};
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_load, RunReport};
