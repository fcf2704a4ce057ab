mod tokens;

pub use tokens::{FIELD_SIGIL, FieldIndex, LITERAL_SIGIL, Token, TokenKind};

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static BRACED_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("static pattern"));
static BRACED_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?[0-9]+)?:(-?[0-9]+)?$").expect("static pattern"));

/// What a matcher recognised at one scan position, before numbers are parsed
enum Shape<'a> {
    Escaped(char),
    Number(&'a str),
    Block(&'a str),
    Braced(&'a str),
    Field(&'a str),
}

/// Tokenizer for one print-specification argument.
///
/// At every position the matchers are tried in a fixed order and the first
/// one that applies wins: doubled sigils, `@` literals, `%` braces, `%`
/// fields, then bare numbers. Characters where nothing applies are gathered
/// into a single plain-text token that runs up to the next match.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Tokenize the entire argument
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Get the next token, or `None` once the argument is consumed
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let start = self.pos;
        if start >= self.source.len() {
            return Ok(None);
        }

        let token = match self.match_at(start) {
            Some((shape, end)) => {
                self.pos = end;
                self.build(shape, start, end)?
            }
            None => {
                let end = self.plain_text_end(start);
                self.pos = end;
                let text = &self.source[start..end];
                Token::new(TokenKind::PlainText(text.to_string()), text, start)
            }
        };

        Ok(Some(token))
    }

    fn match_at(&self, pos: usize) -> Option<(Shape<'a>, usize)> {
        let source = self.source;
        let bytes = source.as_bytes();

        match &bytes[pos..] {
            [b'@', b'@', ..] => Some((Shape::Escaped(LITERAL_SIGIL), pos + 2)),
            [b'%', b'%', ..] => Some((Shape::Escaped(FIELD_SIGIL), pos + 2)),
            [b'@', ..] => {
                if let Some(end) = signed_digits_end(bytes, pos + 1) {
                    return Some((Shape::Number(&source[pos + 1..end]), end));
                }
                self.braced_at(pos + 1)
                    .map(|(inner, end)| (Shape::Block(inner), end))
            }
            [b'%', ..] => {
                if let Some((inner, end)) = self.braced_at(pos + 1) {
                    return Some((Shape::Braced(inner), end));
                }
                signed_digits_end(bytes, pos + 1)
                    .map(|end| (Shape::Field(&source[pos + 1..end]), end))
            }
            _ => signed_digits_end(bytes, pos).map(|end| (Shape::Field(&source[pos..end]), end)),
        }
    }

    /// `{...}` starting at `pos`: the interior and the position after `}`
    fn braced_at(&self, pos: usize) -> Option<(&'a str, usize)> {
        let source = self.source;
        if source.as_bytes().get(pos) != Some(&b'{') {
            return None;
        }
        let close = pos + 1 + source[pos + 1..].find('}')?;
        Some((&source[pos + 1..close], close + 1))
    }

    fn plain_text_end(&self, start: usize) -> usize {
        self.source[start..]
            .char_indices()
            .skip(1)
            .map(|(i, _)| start + i)
            .find(|&pos| self.match_at(pos).is_some())
            .unwrap_or(self.source.len())
    }

    fn build(&self, shape: Shape<'a>, start: usize, end: usize) -> Result<Token> {
        let text = &self.source[start..end];

        let kind = match shape {
            Shape::Escaped(sigil) => TokenKind::EscapedSigil(sigil),
            Shape::Number(number) => TokenKind::LiteralNumber(number.to_string()),
            Shape::Block(block) => TokenKind::LiteralBlock(block.to_string()),
            Shape::Field(digits) => TokenKind::Field(parse_index(digits, text, start)?),
            Shape::Braced(inner) => classify_braced(inner, text, start)?,
        };

        Ok(Token::new(kind, text, start))
    }
}

/// End of `-?[0-9]+` starting at `pos`, if there is one
fn signed_digits_end(bytes: &[u8], pos: usize) -> Option<usize> {
    let digits_start = if bytes.get(pos) == Some(&b'-') { pos + 1 } else { pos };
    let digits = bytes
        .get(digits_start..)?
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    (digits > 0).then_some(digits_start + digits)
}

fn parse_index(digits: &str, text: &str, offset: usize) -> Result<FieldIndex> {
    FieldIndex::parse(digits)
        .ok_or_else(|| Error::syntax(format!("field index '{}' is too large", digits), text, offset))
}

fn classify_braced(inner: &str, text: &str, offset: usize) -> Result<TokenKind> {
    if BRACED_INDEX.is_match(inner) {
        return Ok(TokenKind::Field(parse_index(inner, text, offset)?));
    }

    if let Some(caps) = BRACED_RANGE.captures(inner) {
        let start = caps
            .get(1)
            .map(|m| parse_index(m.as_str(), text, offset))
            .transpose()?;
        let end = caps
            .get(2)
            .map(|m| parse_index(m.as_str(), text, offset))
            .transpose()?;
        return Ok(TokenKind::Range { start, end });
    }

    Ok(TokenKind::Malformed(inner.to_string()))
}
