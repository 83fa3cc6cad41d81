//! Parsed template tokens.
//!
//! Tokens come from an external template parser. Only the `type` tag and the
//! `loc` span are read; any other fields the parser emits are ignored.

use serde::{Deserialize, Serialize};

use super::kind::PugTokenKind;

/// A position in a source file (1-based line, 0-based column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Start and end positions of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl SourceLocation {
    /// Create a location from `(line, column)` pairs.
    pub fn new(start: (usize, usize), end: (usize, usize)) -> Self {
        Self {
            start: Position {
                line: start.0,
                column: start.1,
            },
            end: Position {
                line: end.0,
                column: end.1,
            },
        }
    }
}

/// A single template token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Parser type tag, e.g. `PugIf` or `Text`.
    #[serde(rename = "type")]
    pub token_type: String,
    /// Source span of the token.
    pub loc: SourceLocation,
}

impl Token {
    pub fn new(token_type: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            token_type: token_type.into(),
            loc,
        }
    }

    /// The disallowed kind this token belongs to, if any.
    pub fn pug_kind(&self) -> Option<PugTokenKind> {
        PugTokenKind::from_type_name(&self.token_type)
    }
}
