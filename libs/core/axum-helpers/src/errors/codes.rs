//! Numeric error codes attached to error logs.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

/// Error classes surfaced at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors (1000-1999)
    NotFound,

    // Server errors (5000-5999)
    InternalError,
    IoError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::IoError => "IO_ERROR",
        }
    }

    pub const fn code(&self) -> i32 {
        match self {
            Self::NotFound => 1004,
            Self::InternalError => 5000,
            Self::IoError => 5001,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_grouped_by_class() {
        assert!((1000..2000).contains(&ErrorCode::NotFound.code()));
        for code in [ErrorCode::InternalError, ErrorCode::IoError] {
            assert!((5000..6000).contains(&code.code()), "{code}");
        }
    }
}
