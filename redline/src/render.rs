//! Rendering edit operations as an HTML fragment.
//!
//! Equal runs are copied through verbatim. Inserted and deleted runs are
//! wrapped in `<ins>`/`<del>`, but only around their text: tags inside a
//! changed run are written outside the wrapper so the wrapper never spans a
//! tag boundary.
//!
//! Inline formatting tags (see [`InlineTag`]) at the edge of a changed run get
//! a synthetic `<ins class='mod'>` shell instead, and in deletions the
//! formatting tag itself is dropped. This only approximates valid nesting;
//! block-level and unknown tags are passed through as-is.

use crate::inline::InlineTag;
use crate::token::is_tag;
use crate::tracing_macros::trace;
use blockmatch::{Action, Operation};
use std::fmt::Write;

/// Opens the shell emitted after an inline formatting start tag.
pub const MOD_SHELL_OPEN: &str = "<ins class='mod'>";
/// Closes the shell, emitted before an inline formatting end tag.
pub const MOD_SHELL_CLOSE: &str = "</ins>";

/// CSS classes for the `<ins>`/`<del>` wrappers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffConfig {
    /// Class of `<ins>` around pure insertions (default: `diffins`)
    pub insert_class: String,
    /// Class of `<del>` around pure deletions (default: `diffdel`)
    pub delete_class: String,
    /// Class of both halves of a replacement (default: `diffmod`)
    pub modify_class: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            insert_class: "diffins".to_string(),
            delete_class: "diffdel".to_string(),
            modify_class: "diffmod".to_string(),
        }
    }
}

impl DiffConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class used for insertions.
    pub fn with_insert_class(mut self, class: impl Into<String>) -> Self {
        self.insert_class = class.into();
        self
    }

    /// Set the class used for deletions.
    pub fn with_delete_class(mut self, class: impl Into<String>) -> Self {
        self.delete_class = class.into();
        self
    }

    /// Set the class used for both halves of a replacement.
    pub fn with_modify_class(mut self, class: impl Into<String>) -> Self {
        self.modify_class = class.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wrapper {
    Ins,
    Del,
}

impl Wrapper {
    fn name(self) -> &'static str {
        match self {
            Wrapper::Ins => "ins",
            Wrapper::Del => "del",
        }
    }
}

/// Render `operations` against both token sequences into `out`.
pub fn render_operations<W: Write>(
    operations: &[Operation],
    old_tokens: &[&str],
    new_tokens: &[&str],
    config: &DiffConfig,
    out: &mut W,
) {
    let mut renderer = Renderer::new(out);
    for op in operations {
        trace!(%op, "render");
        let old = &old_tokens[op.old_range()];
        let new = &new_tokens[op.new_range()];
        match op.action {
            Action::Equal => renderer.write_tokens(new),
            Action::Delete => renderer.wrap(Wrapper::Del, &config.delete_class, old),
            Action::Insert => renderer.wrap(Wrapper::Ins, &config.insert_class, new),
            Action::Replace => {
                renderer.wrap(Wrapper::Del, &config.modify_class, old);
                renderer.wrap(Wrapper::Ins, &config.modify_class, new);
            }
            Action::None => {}
        }
    }
}

/// Render `operations` into a new string.
pub fn render_to_string(
    operations: &[Operation],
    old_tokens: &[&str],
    new_tokens: &[&str],
    config: &DiffConfig,
) -> String {
    let mut out = String::new();
    render_operations(operations, old_tokens, new_tokens, config, &mut out);
    out
}

struct Renderer<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> Renderer<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    fn write_tokens(&mut self, tokens: &[&str]) {
        for token in tokens {
            let _ = self.out.write_str(token);
        }
    }

    fn write_wrapped(&mut self, wrapper: Wrapper, class: &str, text: &[&str]) {
        let _ = write!(self.out, "<{} class=\"{}\">", wrapper.name(), class);
        self.write_tokens(text);
        let _ = write!(self.out, "</{}>", wrapper.name());
    }

    /// Wrap the text runs of `tokens`, writing tags between them unwrapped.
    fn wrap(&mut self, wrapper: Wrapper, class: &str, tokens: &[&str]) {
        let mut rest = tokens;

        while !rest.is_empty() {
            let (text, tail) = split_run(rest, |token| !is_tag(token));
            rest = tail;

            let mut shell = "";
            let mut shell_before = false;

            if !text.is_empty() {
                self.write_wrapped(wrapper, class, text);
            } else if InlineTag::opening(rest[0]).is_some() {
                shell = MOD_SHELL_OPEN;
                if wrapper == Wrapper::Del {
                    rest = &rest[1..];
                }
            } else if InlineTag::closing(rest[0]).is_some() {
                shell = MOD_SHELL_CLOSE;
                shell_before = true;
                if wrapper == Wrapper::Del {
                    rest = &rest[1..];
                }
            }

            if rest.is_empty() && shell.is_empty() {
                break;
            }

            let (tags, tail) = split_run(rest, is_tag);
            rest = tail;
            if shell_before {
                let _ = self.out.write_str(shell);
                self.write_tokens(tags);
            } else {
                self.write_tokens(tags);
                let _ = self.out.write_str(shell);
            }
        }
    }
}

/// Split off the longest prefix whose tokens all satisfy `pred`.
fn split_run<'t, 's>(
    tokens: &'t [&'s str],
    pred: impl Fn(&str) -> bool,
) -> (&'t [&'s str], &'t [&'s str]) {
    let len = tokens.iter().take_while(|token| pred(token)).count();
    tokens.split_at(len)
}
