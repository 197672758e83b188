//! Bounded quantity stepper bound to a product row.

/// Quantity input with `+`/`-` controls.
///
/// The value stays within `[1, max]`. Step operations report the new value
/// only when it actually changed, which is when the row should emit a
/// quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityStepper {
    value: u32,
    max: u32,
}

impl QuantityStepper {
    /// Lowest quantity a row can hold.
    pub const MIN: u32 = 1;

    /// Create a stepper, clamping `value` into range.
    pub fn new(value: u32, max: u32) -> Self {
        let max = max.max(Self::MIN);
        Self {
            value: value.clamp(Self::MIN, max),
            max,
        }
    }

    /// Build from raw input attributes.
    ///
    /// An unparseable value starts at 1; an absent or unparseable `max`
    /// falls back to `default_max`.
    pub fn from_input(value: &str, max: Option<&str>, default_max: u32) -> Self {
        let value = value.trim().parse::<u32>().unwrap_or(Self::MIN);
        let max = max
            .and_then(|m| m.trim().parse::<u32>().ok())
            .filter(|&m| m >= Self::MIN)
            .unwrap_or(default_max);
        Self::new(value, max)
    }

    /// Current quantity.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Upper bound.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Step up by one unless already at `max`.
    pub fn increase(&mut self) -> Option<u32> {
        if self.value < self.max {
            self.value += 1;
            Some(self.value)
        } else {
            None
        }
    }

    /// Step down by one unless already at 1.
    pub fn decrease(&mut self) -> Option<u32> {
        if self.value > Self::MIN {
            self.value -= 1;
            Some(self.value)
        } else {
            None
        }
    }

    /// Accept a typed value, clamping it into range.
    pub fn set(&mut self, typed: i64) -> u32 {
        self.value = typed.clamp(i64::from(Self::MIN), i64::from(self.max)) as u32;
        self.value
    }

    pub fn can_increase(&self) -> bool {
        self.value < self.max
    }

    pub fn can_decrease(&self) -> bool {
        self.value > Self::MIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_stops_at_max() {
        let mut stepper = QuantityStepper::new(2, 3);
        assert_eq!(stepper.increase(), Some(3));
        assert_eq!(stepper.increase(), None);
        assert_eq!(stepper.value(), 3);
        assert!(!stepper.can_increase());
    }

    #[test]
    fn test_decrease_stops_at_one() {
        let mut stepper = QuantityStepper::new(2, 10);
        assert_eq!(stepper.decrease(), Some(1));
        assert_eq!(stepper.decrease(), None);
        assert_eq!(stepper.value(), 1);
        assert!(!stepper.can_decrease());
    }

    #[test]
    fn test_from_input_defaults() {
        let stepper = QuantityStepper::from_input("abc", None, 999);
        assert_eq!(stepper.value(), 1);
        assert_eq!(stepper.max(), 999);

        let stepper = QuantityStepper::from_input("5", Some("not-a-number"), 999);
        assert_eq!(stepper.value(), 5);
        assert_eq!(stepper.max(), 999);
    }

    #[test]
    fn test_from_input_uses_max_attribute() {
        let stepper = QuantityStepper::from_input("8", Some("4"), 999);
        assert_eq!(stepper.max(), 4);
        assert_eq!(stepper.value(), 4);
    }

    #[test]
    fn test_set_clamps() {
        let mut stepper = QuantityStepper::new(1, 10);
        assert_eq!(stepper.set(0), 1);
        assert_eq!(stepper.set(-7), 1);
        assert_eq!(stepper.set(50), 10);
        assert_eq!(stepper.set(6), 6);
    }

    #[test]
    fn test_zero_max_is_raised() {
        let stepper = QuantityStepper::new(0, 0);
        assert_eq!(stepper.value(), 1);
        assert_eq!(stepper.max(), 1);
    }
}
