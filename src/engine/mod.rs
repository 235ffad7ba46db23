// ============================================================================
// Engine Module
// Contains the decimal arithmetic and the execution context
// ============================================================================

mod arithmetic;
mod comparator;
mod context;
mod powmod;
mod shared;

pub mod factory;

pub use context::Context;
pub use factory::{create_from_config, ContextBuilder};
pub use shared::SharedContext;
