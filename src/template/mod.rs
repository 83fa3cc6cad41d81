//! Template model consumed by the lint rules.
//!
//! - [`PugTokenKind`] - Closed set of disallowed Pug constructs
//! - [`Token`] - A parsed token with its type tag and location
//! - [`TemplateDocument`] - One parsed file and its template tokens

pub mod document;
pub mod kind;
pub mod token;

pub use document::{TemplateBody, TemplateDocument};
pub use kind::{PugTokenKind, TYPE_PREFIX};
pub use token::{Position, SourceLocation, Token};
