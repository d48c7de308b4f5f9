//! Anonymization engine implementations
//!
//! The trait lives in [`crate::anonymization::engine`]; this module holds the
//! collaborator that drives the external engine process and the factory that
//! picks between it and the dry-run engine.

pub mod factory;
pub mod process;

pub use factory::create_engine;
pub use process::{EngineRequest, ProcessEngine};
