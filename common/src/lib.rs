//! Shared plumbing for the places workspace.
//!
//! This crate contains the pieces every other crate leans on but that carry
//! no business logic of their own:
//!
//! - **error**: `ErrorLocation`, the file/line/column capture attached to
//!   every structured error variant in the workspace
//! - **http_status**: status-code categorization for fetch failures
//!
//! Keeping these here avoids a dependency cycle between the pipeline crate
//! and the application crate.

pub mod error;
pub mod http_status;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
