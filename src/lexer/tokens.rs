/// Marker for literal numbers and literal blocks
pub const LITERAL_SIGIL: char = '@';
/// Marker for explicit field references and ranges
pub const FIELD_SIGIL: char = '%';

/// A field position as written in a print specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIndex {
    /// `n`: field n, with 0 meaning the whole record
    Nth(u64),
    /// `-n`: the n-th field counting back from the last one
    FromEnd(u64),
}

impl FieldIndex {
    /// Parse `-?[0-9]+`; `None` if the digits do not fit in a `u64`
    pub fn parse(text: &str) -> Option<Self> {
        match text.strip_prefix('-') {
            Some(digits) => digits.parse().ok().map(FieldIndex::FromEnd),
            None => text.parse().ok().map(FieldIndex::Nth),
        }
    }
}

/// All token types of the print-specification language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `@@` or `%%`
    EscapedSigil(char),
    /// `@12`, `@-3`: the text after the sigil
    LiteralNumber(String),
    /// `@{...}`: the text between the braces
    LiteralBlock(String),
    /// `3`, `-1`, `%3`, `%-1`, `%{3}`, `%{-1}`
    Field(FieldIndex),
    /// `%{a:b}` where either bound may be omitted
    Range {
        start: Option<FieldIndex>,
        end: Option<FieldIndex>,
    },
    /// `%{...}` whose interior is neither an index nor a range
    Malformed(String),
    /// Anything else
    PlainText(String),
}

/// A token with its position in the argument it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text, so tokens concatenate back to the argument
    pub text: String,
    /// Byte offset of `text` within the argument
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }
}
