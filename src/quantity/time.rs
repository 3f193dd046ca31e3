quantity!(Hours, suffix: "h", precision: 1);

impl Hours {
    pub const DAY: Self = Self(24.0);

    /// Fraction of a day, `0..=1` for valid hours.
    pub const fn day_fraction(self) -> f64 {
        self.0 / Self::DAY.0
    }

    /// Clamp into a single day, `0..=24`.
    #[must_use]
    pub fn clamp_to_day(self) -> Self {
        Self(self.0.clamp(0.0, Self::DAY.0))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_day_fraction() {
        assert_abs_diff_eq!(Hours(8.0).day_fraction(), 1.0 / 3.0);
    }

    #[test]
    fn test_clamp_to_day() {
        assert_eq!(Hours(25.0).clamp_to_day(), Hours::DAY);
        assert_eq!(Hours(-1.0).clamp_to_day(), Hours::ZERO);
        assert_eq!(Hours(2.5).clamp_to_day(), Hours(2.5));
    }
}
