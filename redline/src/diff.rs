//! The two-document diff: tokenize, match, build operations, render.

use crate::render::{DiffConfig, render_to_string};
use crate::token::tokenize;
use crate::tracing_macros::debug;
use blockmatch::{Action, Operation, diff_sequences};
use facet::Facet;

/// Errors returned by [`HtmlDiff`].
#[derive(Facet, Debug)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum DiffError {
    /// diff has not been computed; call compute_diff first
    NotComputed,
}

/// A word-level diff between two HTML documents.
///
/// ```
/// use redline::HtmlDiff;
///
/// let mut diff = HtmlDiff::new("<b>hello</b>", "<b>hello world</b>");
/// assert!(diff.compute_diff());
/// assert_eq!(
///     diff.build_diff_page().unwrap(),
///     r#"<b>hello<ins class="diffins"> world</ins></b>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HtmlDiff<'a> {
    old_text: &'a str,
    new_text: &'a str,
    config: DiffConfig,
    old_tokens: Vec<&'a str>,
    new_tokens: Vec<&'a str>,
    operations: Option<Vec<Operation>>,
}

impl<'a> HtmlDiff<'a> {
    /// Prepare a diff from `old_text` to `new_text` with the default classes.
    pub fn new(old_text: &'a str, new_text: &'a str) -> Self {
        Self::with_config(old_text, new_text, DiffConfig::default())
    }

    /// Prepare a diff with custom wrapper classes.
    pub fn with_config(old_text: &'a str, new_text: &'a str, config: DiffConfig) -> Self {
        Self {
            old_text,
            new_text,
            config,
            old_tokens: Vec::new(),
            new_tokens: Vec::new(),
            operations: None,
        }
    }

    /// Tokenize both documents and compute the edit operations.
    ///
    /// Returns `true` if the documents differ. Calling it again recomputes
    /// from scratch.
    pub fn compute_diff(&mut self) -> bool {
        self.old_tokens = tokenize(self.old_text);
        self.new_tokens = tokenize(self.new_text);

        let operations = diff_sequences(&self.old_tokens, &self.new_tokens);
        let changed = operations.iter().any(|op| op.action != Action::Equal);

        debug!(
            old_tokens = self.old_tokens.len(),
            new_tokens = self.new_tokens.len(),
            operations = operations.len(),
            changed,
            "computed diff"
        );

        self.operations = Some(operations);
        changed
    }

    /// Render the computed operations as an HTML fragment.
    ///
    /// Fails with [`DiffError::NotComputed`] before [`HtmlDiff::compute_diff`]
    /// has run. Each call renders into a fresh buffer.
    pub fn build_diff_page(&self) -> Result<String, DiffError> {
        let operations = self.operations.as_deref().ok_or(DiffError::NotComputed)?;
        Ok(render_to_string(
            operations,
            &self.old_tokens,
            &self.new_tokens,
            &self.config,
        ))
    }

    /// The computed operations, or `None` before [`HtmlDiff::compute_diff`].
    pub fn operations(&self) -> Option<&[Operation]> {
        self.operations.as_deref()
    }

    /// Tokens of the old document (empty before computing).
    pub fn old_tokens(&self) -> &[&'a str] {
        &self.old_tokens
    }

    /// Tokens of the new document (empty before computing).
    pub fn new_tokens(&self) -> &[&'a str] {
        &self.new_tokens
    }

    /// The wrapper classes in use.
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }
}

/// Diff two HTML strings and render the result in one call.
pub fn diff_html(old_text: &str, new_text: &str) -> String {
    let old_tokens = tokenize(old_text);
    let new_tokens = tokenize(new_text);
    let operations = diff_sequences(&old_tokens, &new_tokens);
    render_to_string(
        &operations,
        &old_tokens,
        &new_tokens,
        &DiffConfig::default(),
    )
}
