// ============================================================================
// Shared Context
// Serialized access to one Context from several threads
// ============================================================================

use super::context::Context;
use parking_lot::RwLock;
use std::sync::Arc;

/// A `Context` shared by several threads of one logical execution.
///
/// Arithmetic takes a read lock, so concurrent calls proceed in parallel;
/// scale changes take the write lock and are therefore serialized with
/// every in-flight call. Clones share the same context. Independent
/// executions should each own a plain `Context` instead.
#[derive(Clone, Debug)]
pub struct SharedContext {
    inner: Arc<RwLock<Context>>,
}

impl SharedContext {
    /// Wrap a context for shared use
    pub fn new(context: Context) -> Self {
        Self {
            inner: Arc::new(RwLock::new(context)),
        }
    }

    /// Current ambient scale
    pub fn get_scale(&self) -> u32 {
        self.inner.read().get_scale()
    }

    /// Set the ambient scale (negative values floor to 0)
    pub fn set_scale(&self, value: i64) {
        self.inner.write().set_scale(value);
    }

    /// Set the ambient scale and return the previous one
    pub fn replace_scale(&self, value: i64) -> u32 {
        self.inner.write().replace_scale(value)
    }

    /// Run `f` against the context under a read lock.
    ///
    /// The ambient scale cannot change while `f` runs.
    pub fn with<R>(&self, f: impl FnOnce(&Context) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<Context> for SharedContext {
    fn from(context: Context) -> Self {
        Self::new(context)
    }
}
