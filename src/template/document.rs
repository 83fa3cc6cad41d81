//! Template documents.
//!
//! A [`TemplateDocument`] is the parser's `Program` node for one Vue file,
//! reduced to what the lint rules read: the template body and its tokens.
//! Documents are loaded from the JSON token dump the parser writes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::token::Token;
use crate::error::{PugLintError, Result};

/// The `<template lang="pug">` body of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateBody {
    #[serde(default)]
    pub tokens: Option<Vec<Token>>,
}

/// One analyzed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDocument {
    /// Path the document was loaded from, used for diagnostic spans.
    #[serde(skip)]
    pub path: PathBuf,

    #[serde(rename = "templateBody", default)]
    pub template_body: Option<TemplateBody>,
}

impl TemplateDocument {
    /// Create a document from an in-memory token list.
    pub fn from_tokens(path: impl Into<PathBuf>, tokens: Vec<Token>) -> Self {
        Self {
            path: path.into(),
            template_body: Some(TemplateBody {
                tokens: Some(tokens),
            }),
        }
    }

    /// A document with no template body.
    pub fn without_template(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            template_body: None,
        }
    }

    /// Parse a document from the parser's JSON output.
    pub fn parse(path: impl Into<PathBuf>, json: &str) -> Result<Self> {
        let path = path.into();
        let mut document: TemplateDocument =
            serde_json::from_str(json).map_err(|e| PugLintError::DocumentParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;
        document.path = path;
        Ok(document)
    }

    /// Load a document from a JSON token dump on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| PugLintError::InputRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(path, &json)
    }

    /// The token list, or `None` when there is no template to check.
    pub fn tokens(&self) -> Option<&[Token]> {
        self.template_body
            .as_ref()
            .and_then(|body| body.tokens.as_deref())
    }
}
