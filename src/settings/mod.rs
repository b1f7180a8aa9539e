//! Layered configuration: default files, explicit `--config` files,
//! `MULTIPICK__`-prefixed environment variables, then CLI overrides.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
