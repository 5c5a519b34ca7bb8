//! Column-driven synthetic data generation for rowsmith.
//!
//! This crate turns a validated [`rowsmith_core::Schema`] into rows of fake
//! values and streams them as CSV or JSON lines with reproducible seeding.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::DataGenerator;
pub use errors::GenerationError;
pub use generators::semantic::{FakeProvider, SemanticCategory, SemanticProvider};
pub use generators::{GeneratedValue, Row};
pub use model::{DelimitedOptions, GeneratorConfig, SpecialColumns, WriteReport};
