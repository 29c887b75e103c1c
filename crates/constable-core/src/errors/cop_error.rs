//! Failures raised inside a single cop callback.

use super::error_code::{self, ConstableErrorCode};

/// A cop callback failure. Caught per (cop, node) and never fatal to a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CopError {
    #[error("{message}")]
    Failed { message: String },

    #[error("cop panicked: {message}")]
    Panicked { message: String },

    #[error("node text is not valid UTF-8: {0}")]
    InvalidText(#[from] std::str::Utf8Error),
}

impl CopError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Build from a payload recovered by `catch_unwind`.
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::Panicked { message }
    }
}

impl ConstableErrorCode for CopError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Failed { .. } => error_code::COP_FAILED,
            Self::Panicked { .. } => error_code::COP_PANICKED,
            Self::InvalidText(_) => error_code::COP_INVALID_TEXT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payloads_keep_their_message() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(
            CopError::from_panic(boxed.as_ref()),
            CopError::Panicked {
                message: "boom".to_string()
            }
        );

        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("owned boom"));
        assert_eq!(CopError::from_panic(boxed.as_ref()).to_string(), "cop panicked: owned boom");

        let boxed: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(CopError::from_panic(boxed.as_ref()).error_code(), "COP_PANICKED");
    }
}
