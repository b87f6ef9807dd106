use thiserror::Error;

/// Failures raised by dual-number operations with a restricted domain.
///
/// Every variant terminates only the operation that produced it; the operands
/// (and the receiver of an in-place operation) are left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DualError {
    /// The divisor (or the real part it is determined by) is zero.
    #[error("Division undefined: {operation} with a zero real part.")]
    DivisionUndefined { operation: &'static str },
    /// The function is not defined at the given real part.
    #[error("Domain error: {function} is undefined at real part {real}.")]
    Domain { function: &'static str, real: f64 },
    /// The exponent is not an integer.
    #[error("Invalid exponent: {0}")]
    InvalidExponent(String),
}

pub type DualResult<T> = Result<T, DualError>;

#[cfg(test)]
mod tests {
    use super::DualError;

    #[test]
    fn messages_name_the_failing_operation() {
        let err = DualError::DivisionUndefined {
            operation: "inverse",
        };
        assert_eq!(
            err.to_string(),
            "Division undefined: inverse with a zero real part."
        );

        let err = DualError::Domain {
            function: "log",
            real: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "Domain error: log is undefined at real part -1.5."
        );

        let err = DualError::InvalidExponent("2.5 is not an integer".to_string());
        assert!(err.to_string().contains("2.5 is not an integer"));
    }
}
