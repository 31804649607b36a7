//! Exponential smoothing of displayed values.
//!
//! Raw samples arrive every few seconds; the renderer ticks many times a
//! second. A [`SmoothedValue`] sits between the two, easing the displayed
//! number toward the latest sample instead of jumping stepwise.

/// A continuous display quantity with a target and a smoothed displayed
/// value.
///
/// The target is the latest known-good sample; the displayed value closes a
/// fixed fraction (`alpha`) of the remaining gap on every
/// [`advance`](SmoothedValue::advance). The first target ever set appears
/// exactly, with no easing-in from zero.
#[derive(Debug, Clone, Copy)]
pub struct SmoothedValue {
    alpha: f64,
    target: Option<f64>,
    displayed: Option<f64>,
}

impl SmoothedValue {
    /// Create a smoother with the given coefficient.
    ///
    /// `alpha` must lie in (0, 1]: the fraction of the remaining distance to
    /// the target closed per tick. 1.0 disables smoothing entirely.
    pub fn new(alpha: f64) -> Self {
        debug_assert!(alpha > 0.0 && alpha <= 1.0);
        Self {
            alpha,
            target: None,
            displayed: None,
        }
    }

    /// Update the target from the latest reading.
    ///
    /// Passing `None` (the source has never produced a value) leaves the
    /// displayed value frozen rather than snapping to blank.
    pub fn retarget(&mut self, target: Option<f64>) {
        self.target = target;
    }

    /// Move the displayed value one tick toward the target.
    pub fn advance(&mut self) {
        let Some(target) = self.target else {
            return;
        };
        self.displayed = match self.displayed {
            None => Some(target),
            Some(current) => Some(current + (target - current) * self.alpha),
        };
    }

    /// The value the renderer should draw.
    pub fn displayed(&self) -> Option<f64> {
        self.displayed
    }

    /// The latest raw value being approached.
    pub fn target(&self) -> Option<f64> {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_target_applies_exactly() {
        let mut value = SmoothedValue::new(0.2);
        assert!(value.displayed().is_none());

        value.retarget(Some(30.0));
        value.advance();
        assert_eq!(value.displayed(), Some(30.0));
    }

    #[test]
    fn test_advance_closes_fixed_fraction() {
        let mut value = SmoothedValue::new(0.2);
        value.retarget(Some(20.0));
        value.advance();

        value.retarget(Some(30.0));
        value.advance();
        assert!((value.displayed().unwrap() - 22.0).abs() < 1e-9);

        value.advance();
        assert!((value.displayed().unwrap() - 23.6).abs() < 1e-9);
    }

    #[test]
    fn test_no_target_is_a_no_op() {
        let mut value = SmoothedValue::new(0.5);
        value.advance();
        assert!(value.displayed().is_none());
    }

    #[test]
    fn test_idempotent_at_target() {
        let mut value = SmoothedValue::new(0.3);
        value.retarget(Some(42.0));
        value.advance();
        value.advance();
        assert_eq!(value.displayed(), Some(42.0));
    }

    #[test]
    fn test_monotone_convergence_without_overshoot() {
        let mut value = SmoothedValue::new(0.2);
        value.retarget(Some(10.0));
        value.advance();
        value.retarget(Some(50.0));

        let mut previous = value.displayed().unwrap();
        for _ in 0..200 {
            value.advance();
            let current = value.displayed().unwrap();
            assert!(current >= previous);
            assert!(current <= 50.0);
            previous = current;
        }
        assert!((previous - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_null_target_retains_displayed() {
        let mut value = SmoothedValue::new(0.2);
        value.retarget(Some(25.0));
        value.advance();

        value.retarget(None);
        value.advance();
        value.advance();
        assert_eq!(value.displayed(), Some(25.0));
    }
}
