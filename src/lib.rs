// ============================================================================
// Decimal Engine Library
// Arbitrary-precision decimal arithmetic with truncating scale semantics
// ============================================================================

//! # Decimal Engine
//!
//! Arbitrary-precision decimal arithmetic over textual operands.
//!
//! ## Features
//!
//! - **Unbounded magnitudes** backed by a base-10^9 big-integer kernel
//! - **Truncation, never rounding** for every result that loses digits
//! - **Explicit scale state** owned by a `Context` instead of a global
//! - **Event hooks** for observing operations and scale changes
//!
//! ## Example
//!
//! ```rust
//! use decimal_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let mut ctx = Context::new(Arc::new(NoOpEventHandler));
//!
//! assert_eq!(ctx.add("1.25", "2", None).unwrap(), "3.25");
//! assert_eq!(ctx.mul("1.99", "1.99", Some(1)).unwrap(), "3.9");
//!
//! // Operations without an explicit scale use the ambient one
//! ctx.set_scale(3);
//! assert_eq!(ctx.div("1", "3", None).unwrap(), "0.333");
//!
//! assert_eq!(ctx.div("10", "0", None), Err(NumericError::DivisionByZero));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ContextConfig, Operation};
    pub use crate::engine::{create_from_config, Context, ContextBuilder, SharedContext};
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, OperationEvent,
    };
    pub use crate::numeric::{BigUint, Decimal, NumericError, NumericResult};
}
