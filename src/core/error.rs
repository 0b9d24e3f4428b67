use std::fmt;
use std::io;

/// Why a set of coefficients could not be read.
#[derive(Debug)]
pub enum InputError {
    WrongCount(usize),
    NotANumber(String),
    NonFinite(String),
    EndOfInput,
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongCount(n) => write!(f, "Expected 3 coefficients, got {}", n),
            InputError::NotANumber(tok) => write!(f, "Not a number: '{}'", tok),
            InputError::NonFinite(tok) => write!(f, "Coefficient must be finite: '{}'", tok),
            InputError::EndOfInput => write!(f, "End of input before three coefficients were read"),
            InputError::Io(e) => write!(f, "IO Error: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

impl InputError {
    /// Errors the prompt loop recovers from by asking again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InputError::WrongCount(_) | InputError::NotANumber(_) | InputError::NonFinite(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_wrong_count() {
        let err = InputError::WrongCount(2);
        assert_eq!(format!("{}", err), "Expected 3 coefficients, got 2");
        assert!(err.is_retryable());
    }
    #[test] fn test_not_a_number() {
        let err = InputError::NotANumber("x".into());
        assert_eq!(format!("{}", err), "Not a number: 'x'");
    }
    #[test] fn test_end_of_input_is_fatal() {
        assert!(!InputError::EndOfInput.is_retryable());
        assert!(!InputError::from(io::Error::new(io::ErrorKind::Other, "boom")).is_retryable());
    }
}
