//! Storage Layer
//!
//! Config file persistence. Analysis state itself is deliberately not
//! persisted; a workflow lives and dies with the session.

pub mod config;

pub use config::ConfigService;
