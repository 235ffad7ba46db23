// ============================================================================
// Context Factory
// Creates execution contexts with proper configuration
// ============================================================================

use crate::domain::ContextConfig;
use crate::engine::Context;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a context from configuration
///
/// # Arguments
/// * `config` - Context configuration
/// * `event_handler` - Event handler for operation and scale events
///
/// # Returns
/// * `Result<Context, String>` - Configured context or error
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
/// use std::sync::Arc;
///
/// let config = ContextConfig::currency();
/// let ctx = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(ctx.get_scale(), 2);
/// ```
pub fn create_from_config(
    config: ContextConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Context, String> {
    config.validate()?;

    Ok(Context::configured(&config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating contexts with fluent API
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
/// use std::sync::Arc;
///
/// let ctx = ContextBuilder::new()
///     .named("pricing")
///     .default_scale(4)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(ctx.div("1", "8", None).unwrap(), "0.1250");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    config: ContextConfig,
}

impl ContextBuilder {
    /// Create a new builder (scale 0, unnamed)
    pub fn new() -> Self {
        Self::default()
    }

    /// Label the context for log output
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Set the initial ambient scale
    pub fn default_scale(mut self, scale: u32) -> Self {
        self.config.default_scale = scale;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from the integer preset
    pub fn integer() -> Self {
        Self {
            config: ContextConfig::integer(),
        }
    }

    /// Start from the currency preset
    pub fn currency() -> Self {
        Self {
            config: ContextConfig::currency(),
        }
    }

    /// Start from the high precision preset
    pub fn high_precision() -> Self {
        Self {
            config: ContextConfig::high_precision(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the context
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Context, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ContextConfig {
        &self.config
    }
}
