use super::Sign;

/// How one iteration moves the bracket, given `f(a)`, `f(b)` and `f(c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    /// `f(c)` is exactly zero.
    Root,
    /// The sign changes on `[a, c]`.
    KeepLower,
    /// The sign changes on `[c, b]`.
    KeepUpper,
    /// Neither half shows a sign change.
    NoSignChange,
}

impl Decision {
    /// Picks the half to keep; the lower half is tested first.
    #[allow(clippy::float_cmp)]
    pub(crate) fn new(fa: f64, fb: f64, fc: f64) -> Self {
        if fc == 0.0 {
            Decision::Root
        } else if Sign::opposite(fa, fc) {
            Decision::KeepLower
        } else if Sign::opposite(fc, fb) {
            Decision::KeepUpper
        } else {
            Decision::NoSignChange
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_zero_wins() {
        assert_eq!(Decision::new(-1.0, 1.0, 0.0), Decision::Root);
        assert_eq!(Decision::new(1.0, 1.0, -0.0), Decision::Root);
    }

    #[test]
    fn prefers_lower_half() {
        // Both halves change sign; the lower one is taken.
        assert_eq!(Decision::new(-1.0, -1.0, 2.0), Decision::KeepLower);
        assert_eq!(Decision::new(-1.0, 1.0, 0.5), Decision::KeepLower);
    }

    #[test]
    fn falls_back_to_upper_half() {
        assert_eq!(Decision::new(-1.0, 1.0, -0.5), Decision::KeepUpper);
    }

    #[test]
    fn zero_endpoint_against_negative_midpoint_is_a_change() {
        assert_eq!(Decision::new(-4.0, -0.0, -1.0), Decision::KeepUpper);
    }

    #[test]
    fn zero_endpoint_against_positive_midpoint_is_not() {
        assert_eq!(Decision::new(1.0, 0.0, 0.25), Decision::NoSignChange);
    }

    #[test]
    fn nan_midpoint_aborts() {
        assert_eq!(Decision::new(-1.0, 1.0, f64::NAN), Decision::NoSignChange);
    }
}
