//! Word-level HTML diff rendered as `<ins>`/`<del>` markup.
//!
//! redline provides:
//! - **Tokenizing**: markup split into words, whitespace runs and whole tags
//! - **Matching**: longest-common-run block matching via [`blockmatch`]
//! - **Rendering**: a single fragment with inserted text in
//!   `<ins class="diffins">`, deleted text in `<del class="diffdel">` and
//!   replacements as a `diffmod` delete/insert pair
//!
//! No DOM is built. Tags from the documents pass through verbatim and only
//! the text between them is wrapped, with a special case for inline
//! formatting tags such as `<b>` and `<i>`. The output is not guaranteed to be
//! well-formed for arbitrary markup.
//!
//! # Example
//!
//! ```rust
//! use redline::{HtmlDiff, diff_html};
//!
//! let mut diff = HtmlDiff::new("<p>foo bar</p>", "<p>foo baz</p>");
//! assert!(diff.compute_diff());
//!
//! let html = diff.build_diff_page().unwrap();
//! assert_eq!(
//!     html,
//!     r#"<p>foo <del class="diffmod">bar</del><ins class="diffmod">baz</ins></p>"#
//! );
//!
//! // Or in one call
//! assert_eq!(diff_html("<p>foo bar</p>", "<p>foo baz</p>"), html);
//! ```

mod tracing_macros;

mod diff;
pub mod inline;
pub mod render;
pub mod token;

pub use diff::{DiffError, HtmlDiff, diff_html};
pub use inline::InlineTag;
pub use render::{DiffConfig, render_operations, render_to_string};
pub use token::{is_tag, tokenize};

// Re-export the edit script types so callers can inspect operations
pub use blockmatch::{Action, Operation};
