/// An opaque handle to simulation solution state.
///
/// Steppers never inspect solution vectors directly; the only operation the
/// controller needs is a scalar error measure between two states, used by
/// [`crate::steppers::Dt2`] for step-doubling error control. Cloning must be
/// cheap enough to checkpoint once per accepted step.
pub trait SolutionState: Clone {
    /// Returns a non-negative relative error measure between `self` and a
    /// reference state.
    ///
    /// Identical states must return `0.0`. The scale is up to the
    /// implementation; the error tolerances configured on
    /// [`crate::steppers::Dt2`] are interpreted in the same units.
    fn error_norm(&self, reference: &Self) -> f64;
}

/// The trivial state for simulations that never use error-based stepping.
impl SolutionState for () {
    fn error_norm(&self, _reference: &Self) -> f64 {
        0.0
    }
}

impl SolutionState for f64 {
    fn error_norm(&self, reference: &Self) -> f64 {
        let diff = (self - reference).abs();
        let denom = self.abs().max(reference.abs());
        if denom == 0.0 { 0.0 } else { diff / denom }
    }
}

/// Relative L2 difference. Lengths must match; mismatched tails are a caller
/// bug and contribute nothing.
impl SolutionState for Vec<f64> {
    fn error_norm(&self, reference: &Self) -> f64 {
        let diff_sq: f64 = self
            .iter()
            .zip(reference)
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        let self_sq: f64 = self.iter().map(|a| a * a).sum();
        let ref_sq: f64 = reference.iter().map(|b| b * b).sum();
        let denom = self_sq.max(ref_sq).sqrt();
        if denom == 0.0 {
            0.0
        } else {
            diff_sq.sqrt() / denom
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn unit_state_has_zero_error() {
        assert_relative_eq!(().error_norm(&()), 0.0);
    }

    #[test]
    fn scalar_error_is_relative() {
        assert_relative_eq!(1.0_f64.error_norm(&1.0), 0.0);
        assert_relative_eq!(1.1_f64.error_norm(&1.0), 0.1 / 1.1);
        assert_relative_eq!(0.0_f64.error_norm(&0.0), 0.0);
    }

    #[test]
    fn vector_error_is_relative_l2() {
        let a = vec![3.0, 4.0];
        let b = vec![3.0, 4.0];
        assert_relative_eq!(a.error_norm(&b), 0.0);

        let c = vec![0.0, 0.0];
        let d = vec![3.0, 4.0];
        // ||c - d|| = 5, max norm = 5.
        assert_relative_eq!(c.error_norm(&d), 1.0);
    }
}
