// ============================================================================
// Context Configuration
// Initial settings for a decimal execution context
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scale used by `ContextConfig::currency`
pub const CURRENCY_SCALE: u32 = 2;

/// Scale used by `ContextConfig::high_precision`
pub const HIGH_PRECISION_SCALE: u32 = 20;

/// Configuration for creating a `Context`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContextConfig {
    /// Optional label carried into log output (e.g. a session or request id)
    pub name: Option<String>,

    /// Ambient scale used when an operation is called without one
    pub default_scale: u32,
}

impl ContextConfig {
    /// Create a new configuration with the given default scale
    pub fn new(default_scale: u32) -> Self {
        Self {
            name: None,
            default_scale,
        }
    }

    /// Builder method: Set the context label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method: Set the default scale
    pub fn with_default_scale(mut self, scale: u32) -> Self {
        self.default_scale = scale;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("Context name cannot be blank".to_string());
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ContextConfig {
    /// Integer arithmetic: scale 0
    pub fn integer() -> Self {
        Self::new(0)
    }

    /// Monetary amounts: scale 2
    pub fn currency() -> Self {
        Self::new(CURRENCY_SCALE)
    }

    /// Scientific-style work: scale 20
    pub fn high_precision() -> Self {
        Self::new(HIGH_PRECISION_SCALE)
    }
}
