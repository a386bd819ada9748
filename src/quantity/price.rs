quantity!(
    /// Swedish krona per kilowatt-hour.
    KilowattHourPrice,
    f64,
    "SEK/kWh",
    2
);

quantity!(
    /// [Öre][1] per kilowatt-hour, one-hundredth of [`KilowattHourPrice`].
    ///
    /// [1]: https://en.wikipedia.org/wiki/%C3%96re
    Ore,
    f64,
    "öre/kWh",
    1
);

impl From<Ore> for KilowattHourPrice {
    fn from(ore: Ore) -> Self {
        Self(ore.0 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::Zero;

    #[test]
    fn test_from_ore() {
        assert_abs_diff_eq!(KilowattHourPrice::from(Ore(42.0)).0, 0.42);
    }

    #[test]
    fn test_display() {
        assert_eq!(KilowattHourPrice(0.4249).to_string(), "0.42 SEK/kWh");
        assert_eq!(Ore(42.49).to_string(), "42.5 öre/kWh");
    }

    #[test]
    fn test_arithmetic() {
        let mut sum = KilowattHourPrice::ZERO;
        sum += KilowattHourPrice(1.5);
        sum -= KilowattHourPrice(0.5);
        assert_abs_diff_eq!((sum * 3.0 / 2.0).0, 1.5);
        assert_abs_diff_eq!((-sum).0, -1.0);
    }

    #[test]
    fn test_total_order() {
        assert!(KilowattHourPrice(-0.1) < KilowattHourPrice::ZERO);
        assert_eq!(KilowattHourPrice(1.0).max(KilowattHourPrice(2.0)), KilowattHourPrice(2.0));
    }

    #[test]
    fn test_sum() {
        let sum: KilowattHourPrice =
            [KilowattHourPrice(0.25), KilowattHourPrice(0.5)].into_iter().sum();
        assert_abs_diff_eq!(sum.0, 0.75);
    }
}
