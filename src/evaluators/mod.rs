//! The seven rubric criteria and their execution engine
//!
//! Each criterion is an independent, pure function over the document
//! tree. They share the accessor layer in [`access`] and nothing else:
//! no criterion reads another's output, so the engine is free to run
//! them in any order or in parallel.

pub mod access;
mod base;
mod best_practices;
mod descriptions;
mod engine;
mod examples;
mod paths_operations;
mod response_codes;
mod schema_types;
mod security;

pub use base::{Criterion, ProgressCallback};
pub use best_practices::BestPractices;
pub use descriptions::Descriptions;
pub use engine::{all_criteria, ScoringEngine};
pub use examples::Examples;
pub use paths_operations::PathsOperations;
pub use response_codes::ResponseCodes;
pub use schema_types::SchemaTypes;
pub use security::Security;
