//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and holds the runtime
//! [`config`] used by the `blockfall` binary. The implementation lives in
//! dedicated crates under `crates/`.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_storage as storage;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::Config;
