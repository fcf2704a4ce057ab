use std::ffi::OsString;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Explicit boundary between engine options and the print specification
pub const SEPARATOR: &str = "--";

static NEGATIVE_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[0-9]+$").expect("static pattern"));

/// Command-line arguments split into the two regions pawk understands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Passed to the engine unchanged
    pub engine_args: Vec<String>,
    /// Compiled into the print statement
    pub dsl_args: Vec<String>,
}

/// Split `args` into engine arguments and print-specification arguments.
///
/// An explicit `--` wins: everything before it goes to the engine and
/// everything after it is print specification. Without one, the first
/// argument that is not option-like starts the print specification. A bare
/// `-<digits>` is a negative field index, never an option, so `-F,` stays
/// with the engine while `-2` does not.
pub fn partition(args: &[String]) -> Partition {
    if let Some(pos) = args.iter().position(|a| a == SEPARATOR) {
        return Partition {
            engine_args: args[..pos].to_vec(),
            dsl_args: args[pos + 1..].to_vec(),
        };
    }

    let split = args
        .iter()
        .position(|a| starts_print_spec(a))
        .unwrap_or(args.len());

    Partition {
        engine_args: args[..split].to_vec(),
        dsl_args: args[split..].to_vec(),
    }
}

/// Convert process arguments to strings, rejecting any that are not UTF-8
pub fn utf8_args(args: impl IntoIterator<Item = OsString>) -> Result<Vec<String>> {
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            arg.into_string().map_err(|raw| {
                Error::usage(format!(
                    "argument {} is not valid UTF-8: {}",
                    i + 1,
                    raw.to_string_lossy()
                ))
            })
        })
        .collect()
}

fn starts_print_spec(arg: &str) -> bool {
    !arg.starts_with('-') || NEGATIVE_INDEX.is_match(arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_explicit_separator() {
        let p = partition(&args(&["-F", ".", "--", "1", "3"]));
        assert_eq!(p.engine_args, args(&["-F", "."]));
        assert_eq!(p.dsl_args, args(&["1", "3"]));
    }

    #[test]
    fn test_separator_keeps_dashes_after_it() {
        let p = partition(&args(&["--", "-x", "--", "-F"]));
        assert!(p.engine_args.is_empty());
        assert_eq!(p.dsl_args, args(&["-x", "--", "-F"]));
    }

    #[test]
    fn test_no_options() {
        let p = partition(&args(&["1", "3"]));
        assert!(p.engine_args.is_empty());
        assert_eq!(p.dsl_args, args(&["1", "3"]));
    }

    #[test]
    fn test_attached_option_value() {
        let p = partition(&args(&["-F,", "-v", "1"]));
        assert_eq!(p.engine_args, args(&["-F,", "-v"]));
        assert_eq!(p.dsl_args, args(&["1"]));
    }

    #[test]
    fn test_negative_index_starts_spec() {
        let p = partition(&args(&["-F:", "-1", "-2", "1"]));
        assert_eq!(p.engine_args, args(&["-F:"]));
        assert_eq!(p.dsl_args, args(&["-1", "-2", "1"]));
    }

    #[test]
    fn test_negative_index_first() {
        let p = partition(&args(&["-1", "-F"]));
        assert!(p.engine_args.is_empty());
        assert_eq!(p.dsl_args, args(&["-1", "-F"]));
    }

    #[test]
    fn test_dash_digits_suffix_is_option() {
        let p = partition(&args(&["-1x", "2"]));
        assert_eq!(p.engine_args, args(&["-1x"]));
        assert_eq!(p.dsl_args, args(&["2"]));
    }

    #[test]
    fn test_only_options() {
        let p = partition(&args(&["-F", "-v"]));
        assert_eq!(p.engine_args, args(&["-F", "-v"]));
        assert!(p.dsl_args.is_empty());
    }

    #[test]
    fn test_spaced_option_value_is_ambiguous() {
        // Without `--`, a separately spaced option value starts the print spec.
        let p = partition(&args(&["-F", ".", "1"]));
        assert_eq!(p.engine_args, args(&["-F"]));
        assert_eq!(p.dsl_args, args(&[".", "1"]));
    }

    #[test]
    fn test_utf8_args() {
        let converted = utf8_args(vec![OsString::from("-F,"), OsString::from("é")]).unwrap();
        assert_eq!(converted, args(&["-F,", "é"]));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_arg_is_usage_error() {
        use std::os::unix::ffi::OsStringExt;

        let latin1 = OsString::from_vec(vec![b'a', 0xe9]);
        let err = utf8_args(vec![OsString::from("1"), latin1]).unwrap_err();
        assert!(matches!(err, Error::Usage { .. }));
        assert!(err.to_string().contains("argument 2 is not valid UTF-8"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(partition(&[]), Partition::default());
    }
}
