/// Bounded integer counter backing one item's quantity spinner.
///
/// The lower bound is always 0. The upper bound floats with the category's
/// remaining allowance but is never below the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityControl {
    value: u32,
    max: u32,
}

impl QuantityControl {
    pub(crate) fn new(max: u32) -> Self {
        Self { value: 0, max }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Clamp `requested` into `[0, max]`, store it and return what was stored.
    pub(crate) fn set(&mut self, requested: u32) -> u32 {
        self.value = requested.min(self.max);
        self.value
    }

    /// New ceiling: `max(current + remaining, current)`.
    pub(crate) fn rebound(&mut self, remaining: u32) {
        self.max = self.value.saturating_add(remaining).max(self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clamps_to_max() {
        let mut c = QuantityControl::new(8);
        assert_eq!(c.set(3), 3);
        assert_eq!(c.set(9), 8);
        assert_eq!(c.value(), 8);
    }

    #[test]
    fn rebound_never_drops_below_value() {
        let mut c = QuantityControl::new(5);
        c.set(3);
        c.rebound(0);
        assert_eq!(c.max(), 3);
        c.rebound(2);
        assert_eq!(c.max(), 5);
    }

    #[test]
    fn zero_limit_pins_value() {
        let mut c = QuantityControl::new(0);
        assert_eq!(c.set(4), 0);
        assert_eq!(c.max(), 0);
    }
}
