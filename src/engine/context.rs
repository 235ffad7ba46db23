// ============================================================================
// Decimal Context
// Owns the ambient scale and exposes the text-level call surface
// ============================================================================

use crate::domain::{ContextConfig, Operation};
use crate::interfaces::{EventHandler, NoOpEventHandler, OperationEvent};
use crate::numeric::{Decimal, NumericResult};
use std::fmt;
use std::sync::Arc;

/// One execution context for decimal arithmetic.
///
/// The context owns the ambient scale: the number of fraction digits used
/// by `mul`, `div`, `pow`, `powmod` and `sqrt` when the caller passes no
/// explicit scale. A host creates one context per unit of isolation
/// (request, session, task) and passes it to every call; a fresh context
/// starts at scale 0.
///
/// Operands and results cross the boundary as canonical decimal text.
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
///
/// let mut ctx = Context::default();
/// assert_eq!(ctx.div("1", "3", None).unwrap(), "0");
///
/// ctx.set_scale(3);
/// assert_eq!(ctx.div("1", "3", None).unwrap(), "0.333");
/// assert_eq!(ctx.add("1.5", "2.25", None).unwrap(), "3.75");
/// ```
pub struct Context {
    /// Label for log output
    name: Option<Arc<str>>,

    /// Ambient scale, never negative
    scale: u32,

    /// Event handler for observing operations
    event_handler: Arc<dyn EventHandler>,
}

impl Context {
    /// Create a context with scale 0
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            name: None,
            scale: 0,
            event_handler,
        }
    }

    /// Create a context from an already validated configuration
    pub(crate) fn configured(config: &ContextConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            name: config.name.as_deref().map(Arc::from),
            scale: config.default_scale,
            event_handler,
        }
    }

    /// Context label, if configured
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // ========================================================================
    // Scale State
    // ========================================================================

    /// Current ambient scale
    #[inline]
    pub fn get_scale(&self) -> u32 {
        self.scale
    }

    /// Set the ambient scale.
    ///
    /// Negative values are floored to 0 without an error; values above
    /// `u32::MAX` saturate.
    pub fn set_scale(&mut self, value: i64) {
        self.replace_scale(value);
    }

    /// Set the ambient scale and return the previous one.
    pub fn replace_scale(&mut self, value: i64) -> u32 {
        if value < 0 {
            tracing::trace!(requested = value, "negative scale floored to zero");
        }
        let current = u32::try_from(value.max(0)).unwrap_or(u32::MAX);
        let previous = std::mem::replace(&mut self.scale, current);

        if previous != current {
            self.event_handler
                .on_event(OperationEvent::ScaleChanged { previous, current });
        }
        previous
    }

    /// Explicit scale if given, the ambient scale otherwise
    #[inline]
    fn resolve(&self, scale: Option<u32>) -> usize {
        scale.unwrap_or(self.scale) as usize
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Sum of `a` and `b`.
    ///
    /// Without an explicit scale the result keeps `max(scaleA, scaleB)`
    /// digits; the ambient scale is not consulted.
    pub fn add(&self, a: &str, b: &str, scale: Option<u32>) -> NumericResult<String> {
        self.run(Operation::Add, || {
            let (a, b) = parse_pair(a, b)?;
            Ok(rescale_opt(&a + &b, scale))
        })
        .map(|d| d.to_string())
    }

    /// Difference `a - b`, with the same scale rule as `add`.
    pub fn sub(&self, a: &str, b: &str, scale: Option<u32>) -> NumericResult<String> {
        self.run(Operation::Sub, || {
            let (a, b) = parse_pair(a, b)?;
            Ok(rescale_opt(&a - &b, scale))
        })
        .map(|d| d.to_string())
    }

    /// Product truncated to `min(scaleA + scaleB, scale)` digits.
    pub fn mul(&self, a: &str, b: &str, scale: Option<u32>) -> NumericResult<String> {
        let target = self.resolve(scale);
        self.run(Operation::Mul, || {
            let (a, b) = parse_pair(a, b)?;
            Ok(a.mul_truncated(&b, target))
        })
        .map(|d| d.to_string())
    }

    /// Quotient truncated to `scale` digits.
    ///
    /// # Errors
    /// `DivisionByZero` when `b` is zero.
    pub fn div(&self, a: &str, b: &str, scale: Option<u32>) -> NumericResult<String> {
        let target = self.resolve(scale);
        self.run(Operation::Div, || {
            let (a, b) = parse_pair(a, b)?;
            a.checked_div(&b, target)
        })
        .map(|d| d.to_string())
    }

    /// Remainder of the truncated quotient `a / b`.
    ///
    /// Without an explicit scale the remainder keeps `max(scaleA, scaleB)`
    /// digits; the ambient scale is not consulted.
    ///
    /// # Errors
    /// `DivisionByZero` when `b` is zero.
    pub fn modulo(&self, a: &str, b: &str, scale: Option<u32>) -> NumericResult<String> {
        self.run(Operation::Mod, || {
            let (a, b) = parse_pair(a, b)?;
            a.checked_rem(&b).map(|r| rescale_opt(r, scale))
        })
        .map(|d| d.to_string())
    }

    /// Integer quotient and remainder of `a / b` in one call.
    ///
    /// The quotient always has scale 0; the remainder follows `modulo`.
    ///
    /// # Errors
    /// `DivisionByZero` when `b` is zero.
    pub fn div_rem(
        &self,
        a: &str,
        b: &str,
        scale: Option<u32>,
    ) -> NumericResult<(String, String)> {
        self.run(Operation::DivRem, || {
            let (a, b) = parse_pair(a, b)?;
            let (quotient, remainder) = a.checked_div_rem(&b)?;
            Ok((quotient.to_string(), rescale_opt(remainder, scale).to_string()))
        })
    }

    /// `base` raised to an integral, non-negative `exponent`.
    ///
    /// # Errors
    /// `NonIntegerExponent` or `NegativeExponent` for a bad exponent.
    pub fn pow(&self, base: &str, exponent: &str, scale: Option<u32>) -> NumericResult<String> {
        let target = self.resolve(scale);
        self.run(Operation::Pow, || {
            let (base, exponent) = parse_pair(base, exponent)?;
            base.checked_pow(&exponent, target)
        })
        .map(|d| d.to_string())
    }

    /// `base^exponent mod modulus` over integers.
    ///
    /// # Errors
    /// `NonIntegerOperand`, `NonIntegerExponent`, `NegativeExponent` or
    /// `DivisionByZero` (zero modulus).
    pub fn powmod(
        &self,
        base: &str,
        exponent: &str,
        modulus: &str,
        scale: Option<u32>,
    ) -> NumericResult<String> {
        let target = self.resolve(scale);
        self.run(Operation::PowMod, || {
            let (base, exponent) = parse_pair(base, exponent)?;
            let modulus: Decimal = modulus.parse()?;
            base.checked_powmod(&exponent, &modulus)
                .map(|r| r.rescale(target))
        })
        .map(|d| d.to_string())
    }

    /// Square root truncated to `scale` digits.
    ///
    /// # Errors
    /// `NegativeRadicand` for a negative operand.
    pub fn sqrt(&self, a: &str, scale: Option<u32>) -> NumericResult<String> {
        let target = self.resolve(scale);
        self.run(Operation::Sqrt, || {
            let a: Decimal = a.parse()?;
            a.checked_sqrt(target)
        })
        .map(|d| d.to_string())
    }

    /// Three-way comparison: -1, 0 or 1.
    ///
    /// Without an explicit scale the comparison is exact; with one, both
    /// operands are truncated to it first.
    pub fn compare(&self, a: &str, b: &str, scale: Option<u32>) -> NumericResult<i32> {
        self.run(Operation::Compare, || {
            let (a, b) = parse_pair(a, b)?;
            let ordering = match scale {
                Some(s) => a.compare_at(&b, s as usize),
                None => a.compare(&b),
            };
            Ok(ordering as i32)
        })
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Execute an operation and report its outcome to the event handler
    fn run<T>(&self, operation: Operation, f: impl FnOnce() -> NumericResult<T>) -> NumericResult<T> {
        let outcome = f();
        match &outcome {
            Ok(_) => self
                .event_handler
                .on_event(OperationEvent::Completed { operation }),
            Err(error) => self.event_handler.on_event(OperationEvent::Failed {
                operation,
                error: *error,
            }),
        }
        outcome
    }
}

fn parse_pair(a: &str, b: &str) -> NumericResult<(Decimal, Decimal)> {
    Ok((a.parse()?, b.parse()?))
}

fn rescale_opt(value: Decimal, scale: Option<u32>) -> Decimal {
    match scale {
        Some(s) => value.rescale(s as usize),
        None => value,
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Arc::new(NoOpEventHandler))
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("name", &self.name)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<OperationEvent>>);

    impl EventHandler for Recorder {
        fn on_event(&self, event: OperationEvent) {
            self.0.lock().push(event);
        }
    }

    #[test]
    fn test_fresh_context_scale_is_zero() {
        let ctx = Context::default();
        assert_eq!(ctx.get_scale(), 0);
        assert_eq!(ctx.div("1", "3", None).unwrap(), "0");
    }

    #[test]
    fn test_ambient_scale_applies_to_div() {
        let mut ctx = Context::default();
        ctx.set_scale(3);
        assert_eq!(ctx.div("1", "3", None).unwrap(), "0.333");
        assert_eq!(ctx.div("1", "3", Some(5)).unwrap(), "0.33333");
    }

    #[test]
    fn test_set_scale_floors_negative() {
        let mut ctx = Context::default();
        ctx.set_scale(4);
        ctx.set_scale(-7);
        assert_eq!(ctx.get_scale(), 0);
        ctx.set_scale(i64::MAX);
        assert_eq!(ctx.get_scale(), u32::MAX);
    }

    #[test]
    fn test_replace_scale_returns_previous() {
        let mut ctx = Context::default();
        assert_eq!(ctx.replace_scale(2), 0);
        assert_eq!(ctx.replace_scale(5), 2);
        assert_eq!(ctx.get_scale(), 5);
    }

    #[test]
    fn test_add_sub_ignore_ambient_scale() {
        let mut ctx = Context::default();
        ctx.set_scale(6);
        assert_eq!(ctx.add("1.5", "2.25", None).unwrap(), "3.75");
        assert_eq!(ctx.sub("1.5", "2.25", None).unwrap(), "-0.75");
        assert_eq!(ctx.add("1.5", "2.25", Some(1)).unwrap(), "3.7");
        assert_eq!(ctx.add("1", "2", Some(2)).unwrap(), "3.00");
    }

    #[test]
    fn test_mul_scale_rules() {
        let mut ctx = Context::default();
        assert_eq!(ctx.mul("1.99", "1.99", Some(1)).unwrap(), "3.9");
        assert_eq!(ctx.mul("1.99", "1.99", None).unwrap(), "3");
        ctx.set_scale(10);
        assert_eq!(ctx.mul("1.99", "1.99", None).unwrap(), "3.9601");
        assert_eq!(ctx.mul("2", "3", None).unwrap(), "6");
    }

    #[test]
    fn test_modulo_uses_operand_scale() {
        let mut ctx = Context::default();
        ctx.set_scale(4);
        assert_eq!(ctx.modulo("10", "3", None).unwrap(), "1");
        assert_eq!(ctx.modulo("5.5", "2", None).unwrap(), "1.5");
        assert_eq!(ctx.modulo("5.5", "2", Some(3)).unwrap(), "1.500");
        assert_eq!(ctx.modulo("5.5", "2", Some(0)).unwrap(), "1");
        assert_eq!(
            ctx.modulo("1", "0", None),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_div_rem() {
        let ctx = Context::default();
        let (q, r) = ctx.div_rem("17.25", "4", None).unwrap();
        assert_eq!(q, "4");
        assert_eq!(r, "1.25");
        let (_, r) = ctx.div_rem("17.25", "4", Some(1)).unwrap();
        assert_eq!(r, "1.2");
    }

    #[test]
    fn test_pow_and_powmod() {
        let mut ctx = Context::default();
        assert_eq!(ctx.pow("2", "10", Some(0)).unwrap(), "1024");
        assert_eq!(ctx.pow("2", "-1", Some(0)), Err(NumericError::NegativeExponent));
        assert_eq!(ctx.pow("1.1", "2", None).unwrap(), "1");
        ctx.set_scale(2);
        assert_eq!(ctx.pow("1.1", "2", None).unwrap(), "1.21");
        assert_eq!(ctx.powmod("7", "128", "13", Some(0)).unwrap(), "3");
        assert_eq!(ctx.powmod("4", "13", "497", None).unwrap(), "445.00");
    }

    #[test]
    fn test_sqrt() {
        let ctx = Context::default();
        assert_eq!(ctx.sqrt("2", Some(5)).unwrap(), "1.41421");
        assert_eq!(ctx.sqrt("2", None).unwrap(), "1");
        assert_eq!(ctx.sqrt("-2", None), Err(NumericError::NegativeRadicand));
    }

    #[test]
    fn test_compare() {
        let ctx = Context::default();
        assert_eq!(ctx.compare("1.5", "1.50", None).unwrap(), 0);
        assert_eq!(ctx.compare("1.001", "1", None).unwrap(), 1);
        assert_eq!(ctx.compare("1.001", "1", Some(2)).unwrap(), 0);
        assert_eq!(ctx.compare("-3", "2", None).unwrap(), -1);
    }

    #[test]
    fn test_malformed_operand() {
        let ctx = Context::default();
        assert_eq!(ctx.add("1.2.3", "1", None), Err(NumericError::MalformedOperand));
        assert_eq!(ctx.compare("1", "abc", None), Err(NumericError::MalformedOperand));
        assert_eq!(ctx.sqrt("", None), Err(NumericError::MalformedOperand));
    }

    #[test]
    fn test_contexts_are_isolated() {
        let mut first = Context::default();
        let second = Context::default();
        first.set_scale(8);
        assert_eq!(second.get_scale(), 0);
        assert_eq!(second.div("2", "3", None).unwrap(), "0");
        assert_eq!(first.div("2", "3", None).unwrap(), "0.66666666");
    }

    #[test]
    fn test_events_are_emitted() {
        let recorder = Arc::new(Recorder::default());
        let mut ctx = Context::new(recorder.clone());

        ctx.set_scale(2);
        ctx.set_scale(2);
        let _ = ctx.div("1", "0", None);
        let _ = ctx.add("1", "1", None);

        let events = recorder.0.lock();
        assert_eq!(
            *events,
            vec![
                OperationEvent::ScaleChanged {
                    previous: 0,
                    current: 2
                },
                OperationEvent::Failed {
                    operation: Operation::Div,
                    error: NumericError::DivisionByZero,
                },
                OperationEvent::Completed {
                    operation: Operation::Add
                },
            ]
        );
    }
}
