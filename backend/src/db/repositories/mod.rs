//! Repository implementations module.
//!
//! - `local`: In-memory implementation for unit testing, local development
//!   and the demo server
pub mod local;

pub use local::LocalRepository;
