use std::fmt;

use shapeboard_engine::paint::ParseColorError;

/// Rejected board input.
///
/// None of these leave the board in a changed state.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// Shape name that is not one of circle, square, triangle, hexagon.
    UnknownKind(String),
    /// Fill color that does not parse as a hex color.
    InvalidColor(ParseColorError),
    /// Size scale that is zero, negative or not finite.
    InvalidScale(f32),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::UnknownKind(name) => write!(f, "unknown shape kind '{name}'"),
            BoardError::InvalidColor(e) => write!(f, "invalid fill color: {e}"),
            BoardError::InvalidScale(s) => write!(f, "invalid size scale {s}: must be finite and > 0"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::InvalidColor(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseColorError> for BoardError {
    fn from(e: ParseColorError) -> Self {
        BoardError::InvalidColor(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    use shapeboard_engine::paint::Color;

    #[test]
    fn unknown_kind_names_the_input() {
        let e = BoardError::UnknownKind("star".into());
        assert_eq!(e.to_string(), "unknown shape kind 'star'");
    }

    #[test]
    fn invalid_color_keeps_parse_error_as_source() {
        let parse = Color::from_hex("#zz").unwrap_err();
        let e = BoardError::from(parse);
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("invalid fill color"));
    }

    #[test]
    fn invalid_scale_has_no_source() {
        assert!(BoardError::InvalidScale(0.0).source().is_none());
    }
}
