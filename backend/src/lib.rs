//! Stub platform service library modules.
//!
//! The service intentionally has no business logic: it exposes health
//! probes for orchestration and establishes a database connection at
//! startup so deployments fail loudly when the database is misconfigured.

pub mod api;
pub mod db;
pub mod doc;

pub use doc::ApiDoc;
