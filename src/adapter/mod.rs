//! Schema Adapter Framework
//!
//! Each supported schema provides an adapter that knows its column layout and
//! maps a validated line into the shared `CensusRecord` shape. The loader never
//! sees schema-specific logic; it looks adapters up by `Country`.

pub mod framework;
pub mod india_census;
pub mod india_state_code;
pub mod us_census;

pub use framework::{CensusAdapter, Fields, AdapterRegistry, default_registry};
pub use india_census::IndiaCensusAdapter;
pub use india_state_code::IndiaStateCodeAdapter;
pub use us_census::UsCensusAdapter;
