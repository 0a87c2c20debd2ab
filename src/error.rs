use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised while parsing an `Accept` header.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// A byte the grammar does not allow at this position.
    #[error("unexpected character 0x{0:02x} at offset {1}")]
    UnexpectedCharacter(u8, usize),

    /// The header ended right after a `\` inside a quoted value.
    #[error("unexpected end of input inside a quoted value")]
    UnexpectedEndOfInput,

    /// A `*` media type not followed by `/`.
    #[error("expected '/' after wildcard at offset {0}")]
    ExpectedSlash(usize),

    /// The `q` parameter was not a number in `[0, 1]`.
    #[error("q value {0} is out of range")]
    QOutOfRange(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ParseError::UnexpectedCharacter(b'{', 7).to_string(),
            "unexpected character 0x7b at offset 7"
        );
        assert_eq!(
            ParseError::ExpectedSlash(1).to_string(),
            "expected '/' after wildcard at offset 1"
        );
        assert_eq!(
            ParseError::QOutOfRange(1.5).to_string(),
            "q value 1.5 is out of range"
        );
    }
}
