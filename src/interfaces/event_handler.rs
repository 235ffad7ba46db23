// ============================================================================
// Event Handler Interface
// Defines the contract for observing context activity
// ============================================================================

use crate::domain::Operation;
use crate::numeric::NumericError;

/// Events emitted by a `Context`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationEvent {
    /// Operation produced a result
    Completed { operation: Operation },

    /// Operation rejected its input
    Failed {
        operation: Operation,
        error: NumericError,
    },

    /// Ambient scale changed
    ScaleChanged { previous: u32, current: u32 },
}

/// Event handler trait for observing a context.
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a context event
    fn on_event(&self, event: OperationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<OperationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler (default)
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: OperationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: OperationEvent) {
        match event {
            OperationEvent::Failed { operation, error } => {
                tracing::warn!(%operation, %error, "Decimal operation failed");
            },
            other => tracing::debug!("Decimal engine event: {:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct Recorder(Mutex<Vec<OperationEvent>>);

    impl EventHandler for Recorder {
        fn on_event(&self, event: OperationEvent) {
            self.0.lock().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(OperationEvent::Completed {
            operation: Operation::Add,
        });
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_event(OperationEvent::Failed {
            operation: Operation::Div,
            error: NumericError::DivisionByZero,
        });
        handler.on_event(OperationEvent::ScaleChanged {
            previous: 0,
            current: 3,
        });
    }

    #[test]
    fn test_batch_delivery_preserves_order() {
        let recorder = Recorder(Mutex::new(Vec::new()));
        recorder.on_events(vec![
            OperationEvent::Completed {
                operation: Operation::Mul,
            },
            OperationEvent::ScaleChanged {
                previous: 1,
                current: 2,
            },
        ]);

        let events = recorder.0.lock();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            OperationEvent::Completed {
                operation: Operation::Mul
            }
        ));
    }
}
