//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core,driver,engine,input,term,types}`
//! so integration tests and benches have one import path.

pub use blockfall_core as core;
pub use blockfall_driver as driver;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
