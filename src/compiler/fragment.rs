use std::fmt;

use crate::lexer::FieldIndex;

/// Name of the helper the prelude defines for field ranges
pub const RANGE_FUNCTION: &str = "_pawk_range";

/// Largest field index emitted as a bare `$n`. Beyond it the reference is
/// guarded by `NF`, since some engines abort on huge constant field indexes.
pub const UNGUARDED_FIELD_LIMIT: u64 = 1024;

/// One compiled piece of a print argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Fixed text, printed exactly as given
    Literal(String),
    /// A single field of the current record
    Field(FieldIndex),
    /// An inclusive span of fields joined by OFS, bounds already defaulted
    Range { start: FieldIndex, end: FieldIndex },
}

impl Fragment {
    /// Range with omitted bounds filled in: start defaults to the first
    /// field, end to the last
    pub fn range(start: Option<FieldIndex>, end: Option<FieldIndex>) -> Self {
        Fragment::Range {
            start: start.unwrap_or(FieldIndex::Nth(1)),
            end: end.unwrap_or(FieldIndex::FromEnd(1)),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Literal(text) => f.write_str(&awk_string(text)),
            Fragment::Field(FieldIndex::Nth(n)) if *n <= UNGUARDED_FIELD_LIMIT => {
                write!(f, "${}", n)
            }
            Fragment::Field(FieldIndex::Nth(n)) => write!(f, "({} > NF ? \"\" : $({}))", n, n),
            Fragment::Field(FieldIndex::FromEnd(n)) => {
                let position = from_end(*n);
                write!(f, "({} < 1 ? \"\" : {})", position, field_at(&position))
            }
            Fragment::Range { start, end } => {
                write!(f, "{}({}, {})", RANGE_FUNCTION, bound(start), bound(end))
            }
        }
    }
}

/// Run-time position of the n-th field from the end: `NF - n + 1`
fn from_end(n: u64) -> String {
    match n {
        0 => "NF + 1".to_string(),
        1 => "NF".to_string(),
        _ => format!("NF - {}", n - 1),
    }
}

fn field_at(position: &str) -> String {
    if position == "NF" {
        "$NF".to_string()
    } else {
        format!("$({})", position)
    }
}

fn bound(index: &FieldIndex) -> String {
    match index {
        FieldIndex::Nth(n) => n.to_string(),
        FieldIndex::FromEnd(n) => from_end(*n),
    }
}

/// Quote `text` as an AWK string literal
pub fn awk_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_awk_string() {
        assert_eq!(awk_string("abc"), r#""abc""#);
        assert_eq!(awk_string(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(awk_string(r"a\b"), r#""a\\b""#);
        assert_eq!(awk_string("a\nb\tc"), r#""a\nb\tc""#);
        assert_eq!(awk_string(""), r#""""#);
    }

    #[test]
    fn test_positive_field() {
        assert_eq!(Fragment::Field(FieldIndex::Nth(3)).to_string(), "$3");
        assert_eq!(Fragment::Field(FieldIndex::Nth(0)).to_string(), "$0");
        assert_eq!(Fragment::Field(FieldIndex::Nth(1024)).to_string(), "$1024");
    }

    #[test]
    fn test_huge_positive_field_is_guarded() {
        assert_eq!(
            Fragment::Field(FieldIndex::Nth(1025)).to_string(),
            r#"(1025 > NF ? "" : $(1025))"#
        );
        assert_eq!(
            Fragment::Field(FieldIndex::Nth(99999999999)).to_string(),
            r#"(99999999999 > NF ? "" : $(99999999999))"#
        );
    }

    #[test]
    fn test_negative_field() {
        assert_eq!(
            Fragment::Field(FieldIndex::FromEnd(1)).to_string(),
            r#"(NF < 1 ? "" : $NF)"#
        );
        assert_eq!(
            Fragment::Field(FieldIndex::FromEnd(3)).to_string(),
            r#"(NF - 2 < 1 ? "" : $(NF - 2))"#
        );
        assert_eq!(
            Fragment::Field(FieldIndex::FromEnd(0)).to_string(),
            r#"(NF + 1 < 1 ? "" : $(NF + 1))"#
        );
    }

    #[test]
    fn test_range_defaults() {
        assert_eq!(
            Fragment::range(None, None),
            Fragment::Range {
                start: FieldIndex::Nth(1),
                end: FieldIndex::FromEnd(1),
            }
        );
        assert_eq!(Fragment::range(None, None).to_string(), "_pawk_range(1, NF)");
    }

    #[test]
    fn test_range_bounds() {
        let range = Fragment::range(Some(FieldIndex::FromEnd(3)), Some(FieldIndex::Nth(5)));
        assert_eq!(range.to_string(), "_pawk_range(NF - 2, 5)");
    }
}
