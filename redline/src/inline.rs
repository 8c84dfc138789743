//! Inline formatting tags that get special treatment at diff boundaries.

/// Inline formatting elements whose tags must not end up inside an
/// `<ins>`/`<del>` wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineTag {
    Strong,
    B,
    I,
    Big,
    Small,
    U,
    Sub,
    Sup,
    Strike,
    S,
}

impl InlineTag {
    /// Every inline tag, in lookup order.
    pub const ALL: [InlineTag; 10] = [
        InlineTag::Strong,
        InlineTag::B,
        InlineTag::I,
        InlineTag::Big,
        InlineTag::Small,
        InlineTag::U,
        InlineTag::Sub,
        InlineTag::Sup,
        InlineTag::Strike,
        InlineTag::S,
    ];

    /// The element name, lowercase.
    pub fn name(self) -> &'static str {
        match self {
            InlineTag::Strong => "strong",
            InlineTag::B => "b",
            InlineTag::I => "i",
            InlineTag::Big => "big",
            InlineTag::Small => "small",
            InlineTag::U => "u",
            InlineTag::Sub => "sub",
            InlineTag::Sup => "sup",
            InlineTag::Strike => "strike",
            InlineTag::S => "s",
        }
    }

    /// The literal end tag, e.g. `</b>`.
    pub fn end_tag(self) -> &'static str {
        match self {
            InlineTag::Strong => "</strong>",
            InlineTag::B => "</b>",
            InlineTag::I => "</i>",
            InlineTag::Big => "</big>",
            InlineTag::Small => "</small>",
            InlineTag::U => "</u>",
            InlineTag::Sub => "</sub>",
            InlineTag::Sup => "</sup>",
            InlineTag::Strike => "</strike>",
            InlineTag::S => "</s>",
        }
    }

    /// Whether `token` starts with this tag's opening form: `<name` followed
    /// by `>` or whitespace. Case-sensitive.
    pub fn is_opened_by(self, token: &str) -> bool {
        token
            .strip_prefix('<')
            .and_then(|rest| rest.strip_prefix(self.name()))
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c == '>' || c.is_whitespace())
    }

    /// The inline tag `token` opens, if any.
    pub fn opening(token: &str) -> Option<InlineTag> {
        Self::ALL.into_iter().find(|tag| tag.is_opened_by(token))
    }

    /// The inline tag `token` closes, if any. Only the exact end tag counts.
    pub fn closing(token: &str) -> Option<InlineTag> {
        Self::ALL.into_iter().find(|tag| tag.end_tag() == token)
    }
}
