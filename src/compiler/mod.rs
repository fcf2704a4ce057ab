mod fragment;

pub use fragment::{Fragment, RANGE_FUNCTION, awk_string};

use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Compile one token into the fragment that prints it
pub fn compile_token(token: &Token) -> Result<Fragment> {
    let fragment = match &token.kind {
        TokenKind::EscapedSigil(sigil) => Fragment::Literal(sigil.to_string()),
        TokenKind::LiteralNumber(text)
        | TokenKind::LiteralBlock(text)
        | TokenKind::PlainText(text) => Fragment::Literal(text.clone()),
        TokenKind::Field(index) => Fragment::Field(*index),
        TokenKind::Range { start, end } => Fragment::range(*start, *end),
        TokenKind::Malformed(_) => {
            return Err(Error::syntax(
                "expected a field index or a start:end range inside braces",
                token.text.as_str(),
                token.offset,
            ));
        }
    };

    Ok(fragment)
}

/// Compile the tokens of one argument, stopping at the first error
pub fn compile_group(tokens: &[Token]) -> Result<Vec<Fragment>> {
    tokens.iter().map(compile_token).collect()
}
