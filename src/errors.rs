use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum AtmosphereError {
    /// Altitude lies above the last layer and the model is not allowed to extrapolate.
    OutOfRange { altitude_m: f64, ceiling_m: f64 },
    NonFiniteAltitude(f64),
    InvalidSweep { start: f64, stop: f64, step: f64 },
    InvalidTable {
        context: &'static str,
        detail: String,
    },
    CsvError(csv::Error),
    IoError(io::Error),
}

impl fmt::Display for AtmosphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtmosphereError::OutOfRange {
                altitude_m,
                ceiling_m,
            } => write!(
                f,
                "Altitude {} m is above the model ceiling of {} m",
                altitude_m, ceiling_m
            ),
            AtmosphereError::NonFiniteAltitude(h) => write!(f, "Altitude is not finite: {}", h),
            AtmosphereError::InvalidSweep { start, stop, step } => write!(
                f,
                "Cannot reach {} from {} in steps of {}",
                stop, start, step
            ),
            AtmosphereError::InvalidTable { context, detail } => {
                write!(f, "Invalid {}: {}", context, detail)
            }
            AtmosphereError::CsvError(e) => write!(f, "CSV parsing error: {}", e),
            AtmosphereError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for AtmosphereError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AtmosphereError::CsvError(e) => Some(e),
            AtmosphereError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for AtmosphereError {
    fn from(err: io::Error) -> Self {
        AtmosphereError::IoError(err)
    }
}

impl From<csv::Error> for AtmosphereError {
    fn from(err: csv::Error) -> Self {
        AtmosphereError::CsvError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = AtmosphereError::OutOfRange {
            altitude_m: 90_000.0,
            ceiling_m: 84_852.0,
        };
        assert_eq!(
            err.to_string(),
            "Altitude 90000 m is above the model ceiling of 84852 m"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_has_source() {
        let err: AtmosphereError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
