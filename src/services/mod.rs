//! Business Logic Services
//!
//! The orchestration core. `orchestrator` owns the one current workflow;
//! `search`, `assistant` and `comparison` are parameterized by the document
//! identity it produces and never mutate its state.

pub mod assistant;
pub mod comparison;
pub mod orchestrator;
pub mod search;
