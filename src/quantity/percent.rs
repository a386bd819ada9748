quantity!(Percent, u16, "%", 0);

impl Percent {
    /// Swedish VAT («moms») on electricity.
    pub const VAT: Self = Self(25);

    pub fn to_proportion(self) -> f64 {
        0.01 * f64::from(self.0)
    }

    /// Multiplier that adds the percentage on top of a value.
    pub fn to_multiplier(self) -> f64 {
        1.0 + self.to_proportion()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_to_multiplier() {
        assert_abs_diff_eq!(Percent::VAT.to_multiplier(), 1.25);
        assert_abs_diff_eq!(Percent(0).to_multiplier(), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Percent(25).to_string(), "25 %");
    }
}
