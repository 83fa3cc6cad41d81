//! Ignore-list normalization.
//!
//! Users name ignored constructs by their short name ("if", "Each") rather
//! than the parser's type tag ("PugIf", "PugEach"). [`normalize_ignores`]
//! maps each entry onto a [`PugTokenKind`], and [`IgnoreSet::resolve`]
//! builds the set the filter consults, rejecting entries that name nothing.

use std::collections::BTreeSet;

use crate::error::{PugLintError, Result};
use crate::template::{PugTokenKind, TYPE_PREFIX};

/// Map each ignore entry to the kind it names, keeping input order.
///
/// Matching prepends the type prefix and compares case-insensitively, so
/// "if", "If" and "IF" all resolve to [`PugTokenKind::If`]. Entries that
/// match no kind come back as `None`.
pub fn normalize_ignores<S: AsRef<str>>(entries: &[S]) -> Vec<Option<PugTokenKind>> {
    entries
        .iter()
        .map(|entry| normalize_entry(entry.as_ref()))
        .collect()
}

fn normalize_entry(entry: &str) -> Option<PugTokenKind> {
    let sample = format!("{}{}", TYPE_PREFIX, entry).to_lowercase();
    PugTokenKind::ALL
        .into_iter()
        .find(|kind| kind.type_name().to_lowercase() == sample)
}

/// Comma-separated list of every accepted ignore name.
pub fn accepted_names() -> String {
    PugTokenKind::ALL
        .iter()
        .map(|kind| kind.short_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The set of kinds a rule does not report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    kinds: BTreeSet<PugTokenKind>,
}

impl IgnoreSet {
    /// An empty set; nothing is ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve user entries for `rule`, failing on the first unknown entry.
    pub fn resolve<S: AsRef<str>>(rule: &str, entries: &[S]) -> Result<Self> {
        let normalized = normalize_ignores(entries);
        let mut kinds = BTreeSet::new();

        for (entry, kind) in entries.iter().zip(normalized) {
            match kind {
                Some(kind) => {
                    kinds.insert(kind);
                }
                None => {
                    return Err(PugLintError::UnknownIgnore {
                        rule: rule.to_string(),
                        entry: entry.as_ref().to_string(),
                        expected: accepted_names(),
                    });
                }
            }
        }

        tracing::debug!("Rule '{}' ignores {} construct(s)", rule, kinds.len());
        Ok(Self { kinds })
    }

    /// Whether `kind` is ignored.
    pub fn contains(&self, kind: PugTokenKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Number of ignored kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether nothing is ignored.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterate over the ignored kinds in table order.
    pub fn iter(&self) -> impl Iterator<Item = PugTokenKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl FromIterator<PugTokenKind> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = PugTokenKind>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}
