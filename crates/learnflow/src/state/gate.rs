//! Caller-side policy for how many domains must be picked before sign-up can
//! finish. The model itself only reports what is selected.

/// Minimum used when neither config.yaml nor the command line set one
pub const DEFAULT_MIN_DOMAINS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionGate {
    minimum: usize,
}

impl Default for SelectionGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DOMAINS)
    }
}

impl SelectionGate {
    pub fn new(minimum: usize) -> Self {
        Self { minimum }
    }

    pub fn minimum(&self) -> usize {
        self.minimum
    }

    pub fn is_satisfied(&self, selected: usize) -> bool {
        selected >= self.minimum
    }

    /// How many more selections are needed, zero once satisfied
    pub fn remaining(&self, selected: usize) -> usize {
        self.minimum.saturating_sub(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requires_three() {
        let gate = SelectionGate::default();
        assert!(!gate.is_satisfied(2));
        assert!(gate.is_satisfied(3));
        assert!(gate.is_satisfied(7));
    }

    #[test]
    fn test_remaining() {
        let gate = SelectionGate::new(3);
        assert_eq!(gate.remaining(0), 3);
        assert_eq!(gate.remaining(2), 1);
        assert_eq!(gate.remaining(5), 0);
    }

    #[test]
    fn test_zero_minimum_is_always_open() {
        assert!(SelectionGate::new(0).is_satisfied(0));
    }
}
