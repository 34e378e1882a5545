use crate::errors::AtmosphereError;

/// Where a query point falls relative to a set of breakpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location {
    /// Query equals breakpoint `i`; the tabulated value is returned as-is.
    Exact(usize),
    /// Query lies on the line through breakpoints `lower` and `lower + 1`.
    /// `fraction` is outside [0, 1] when extrapolating.
    Between { lower: usize, fraction: f64 },
}

/// Strictly increasing abscissae shared by any number of value columns.
///
/// Locating once and applying the same [`Location`] to every column keeps
/// interpolation and extrapolation identical across quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    xs: Vec<f64>,
}

impl Breakpoints {
    pub fn new(xs: Vec<f64>) -> Result<Self, AtmosphereError> {
        if xs.len() < 2 {
            return Err(AtmosphereError::InvalidTable {
                context: "breakpoints",
                detail: format!("need at least 2 breakpoints, got {}", xs.len()),
            });
        }
        if let Some(bad) = xs.iter().find(|x| !x.is_finite()) {
            return Err(AtmosphereError::InvalidTable {
                context: "breakpoints",
                detail: format!("breakpoint {} is not finite", bad),
            });
        }
        if let Some(w) = xs.windows(2).find(|w| w[1] <= w[0]) {
            return Err(AtmosphereError::InvalidTable {
                context: "breakpoints",
                detail: format!("breakpoints not strictly increasing at {} -> {}", w[0], w[1]),
            });
        }
        Ok(Self { xs })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.xs
    }

    /// Lower and upper ends of the tabulated domain.
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    pub fn contains(&self, x: f64) -> bool {
        let (lo, hi) = self.domain();
        (lo..=hi).contains(&x)
    }

    pub fn locate(&self, x: f64) -> Location {
        let n = self.xs.len();
        let idx = self.xs.partition_point(|&b| b < x);
        if idx < n && self.xs[idx] == x {
            return Location::Exact(idx);
        }

        // Below the table uses the first segment, above it the last one.
        let lower = idx.saturating_sub(1).min(n - 2);
        let (x0, x1) = (self.xs[lower], self.xs[lower + 1]);
        Location::Between {
            lower,
            fraction: (x - x0) / (x1 - x0),
        }
    }

    /// Evaluates a column at a previously located point.
    pub fn evaluate(&self, location: Location, ys: &[f64]) -> f64 {
        debug_assert_eq!(ys.len(), self.xs.len());
        match location {
            Location::Exact(i) => ys[i],
            Location::Between { lower, fraction } => {
                let (y0, y1) = (ys[lower], ys[lower + 1]);
                y0 + (y1 - y0) * fraction
            }
        }
    }

    pub fn interpolate(&self, ys: &[f64], x: f64) -> f64 {
        self.evaluate(self.locate(x), ys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    fn grid() -> Breakpoints {
        Breakpoints::new(vec![0.0, 1.0, 3.0]).unwrap()
    }

    const YS: [f64; 3] = [10.0, 20.0, 0.0];

    #[test_case(0.0, 10.0; "first breakpoint")]
    #[test_case(1.0, 20.0; "interior breakpoint")]
    #[test_case(3.0, 0.0; "last breakpoint")]
    #[test_case(0.5, 15.0; "midpoint of first segment")]
    #[test_case(2.0, 10.0; "midpoint of second segment")]
    #[test_case(-1.0, 0.0; "extrapolate below with first slope")]
    #[test_case(4.0, -10.0; "extrapolate above with last slope")]
    fn test_interpolate(x: f64, expected: f64) {
        assert_abs_diff_eq!(grid().interpolate(&YS, x), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_hit_is_reported() {
        assert_eq!(grid().locate(1.0), Location::Exact(1));
        assert_eq!(grid().locate(3.0), Location::Exact(2));
    }

    #[test]
    fn test_extrapolation_is_not_clamped() {
        let y = grid().interpolate(&YS, 1.0e6);
        assert!(y < -1.0e6);
    }

    #[test]
    fn test_nan_query_propagates() {
        assert!(grid().interpolate(&YS, f64::NAN).is_nan());
    }

    #[test_case(vec![1.0]; "too few points")]
    #[test_case(vec![0.0, 0.0, 1.0]; "repeated breakpoint")]
    #[test_case(vec![2.0, 1.0]; "decreasing")]
    #[test_case(vec![0.0, f64::NAN]; "nan breakpoint")]
    fn test_rejects_bad_breakpoints(xs: Vec<f64>) {
        assert!(matches!(
            Breakpoints::new(xs),
            Err(AtmosphereError::InvalidTable { .. })
        ));
    }
}
