//! Disallowed Pug token kinds.
//!
//! [`PugTokenKind`] is the closed set of control-flow and templating
//! constructs the parser can emit for a Pug template body. Each kind knows
//! its parser type tag, the short name users write in rule options, and the
//! human-readable description used in diagnostics.

use std::fmt;

/// Prefix shared by every Pug token type tag.
pub const TYPE_PREFIX: &str = "Pug";

/// A Pug construct that can be forbidden by lint rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PugTokenKind {
    Code,
    If,
    Else,
    ElseIf,
    Case,
    When,
    Default,
    Each,
    While,
    Include,
    Path,
    Extends,
    Block,
    InterpolatedCode,
    Mixin,
    Call,
}

impl PugTokenKind {
    /// Every kind, in table order.
    pub const ALL: [PugTokenKind; 16] = [
        PugTokenKind::Code,
        PugTokenKind::If,
        PugTokenKind::Else,
        PugTokenKind::ElseIf,
        PugTokenKind::Case,
        PugTokenKind::When,
        PugTokenKind::Default,
        PugTokenKind::Each,
        PugTokenKind::While,
        PugTokenKind::Include,
        PugTokenKind::Path,
        PugTokenKind::Extends,
        PugTokenKind::Block,
        PugTokenKind::InterpolatedCode,
        PugTokenKind::Mixin,
        PugTokenKind::Call,
    ];

    /// The token `type` tag the parser emits for this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            PugTokenKind::Code => "PugCode",
            PugTokenKind::If => "PugIf",
            PugTokenKind::Else => "PugElse",
            PugTokenKind::ElseIf => "PugElseIf",
            PugTokenKind::Case => "PugCase",
            PugTokenKind::When => "PugWhen",
            PugTokenKind::Default => "PugDefault",
            PugTokenKind::Each => "PugEach",
            PugTokenKind::While => "PugWhile",
            PugTokenKind::Include => "PugInclude",
            PugTokenKind::Path => "PugPath",
            PugTokenKind::Extends => "PugExtends",
            PugTokenKind::Block => "PugBlock",
            PugTokenKind::InterpolatedCode => "PugInterpolatedCode",
            PugTokenKind::Mixin => "PugMixin",
            PugTokenKind::Call => "PugCall",
        }
    }

    /// Human-readable description, as used in "Using pug {description} is forbidden."
    pub fn description(self) -> &'static str {
        match self {
            PugTokenKind::Code => "inline javascript code",
            PugTokenKind::If => "if statements",
            PugTokenKind::Else => "else statements",
            PugTokenKind::ElseIf => "else if statements",
            PugTokenKind::Case => "case statements",
            PugTokenKind::When => "when statements",
            PugTokenKind::Default => "default when statements",
            PugTokenKind::Each => "each loops",
            PugTokenKind::While => "while loops",
            PugTokenKind::Include => "includes",
            PugTokenKind::Path => "paths",
            PugTokenKind::Extends => "extends",
            PugTokenKind::Block => "blocks",
            PugTokenKind::InterpolatedCode => "interpolations",
            PugTokenKind::Mixin => "mixins",
            PugTokenKind::Call => "mixin calls",
        }
    }

    /// The name users write in `ignores`: the type tag without its prefix, lower-cased.
    pub fn short_name(self) -> String {
        self.type_name()[TYPE_PREFIX.len()..].to_lowercase()
    }

    /// Look up a kind by its exact parser type tag.
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.type_name() == type_name)
    }
}

impl fmt::Display for PugTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
