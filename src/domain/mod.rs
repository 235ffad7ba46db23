// ============================================================================
// Domain Models Module
// Configuration and operation vocabulary shared across the engine
// ============================================================================

pub mod config;
pub mod operation;

pub use config::ContextConfig;
pub use operation::Operation;
