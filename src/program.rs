use std::fmt;

use crate::compiler::{Fragment, RANGE_FUNCTION};
use crate::config::Config;

/// A complete generated AWK program.
///
/// Each group holds the fragments compiled from one print-specification
/// argument. Groups become separate `print` arguments, so the engine puts
/// OFS between them; fragments inside a group are concatenated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub groups: Vec<Vec<Fragment>>,
}

impl Program {
    pub fn from_groups(groups: Vec<Vec<Fragment>>) -> Self {
        Self { groups }
    }

    fn write_prelude(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BEGIN {{ OFS = FS }}")?;
        writeln!(f, "function {}(lo, hi,    out, i) {{", RANGE_FUNCTION)?;
        writeln!(f, "    if (lo < 1) lo = 1")?;
        writeln!(f, "    if (hi > NF) hi = NF")?;
        writeln!(f, "    if (lo > hi) return \"\"")?;
        writeln!(f, "    out = $lo")?;
        writeln!(f, "    for (i = lo + 1; i <= hi; i++) out = out OFS $i")?;
        writeln!(f, "    return out")?;
        writeln!(f, "}}")
    }

    fn write_group(f: &mut fmt::Formatter<'_>, group: &[Fragment]) -> fmt::Result {
        if group.is_empty() {
            return f.write_str("\"\"");
        }
        for (i, fragment) in group.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", fragment)?;
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_prelude(f)?;

        f.write_str("{ print ")?;
        if self.groups.is_empty() {
            f.write_str("\"\"")?;
        }
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Self::write_group(f, group)?;
        }
        writeln!(f, " }}")
    }
}

/// Everything needed to launch the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub engine: String,
    /// Pass-through engine options, in their original order
    pub engine_args: Vec<String>,
    /// Generated program text, passed as the last argument
    pub program: String,
}

impl Invocation {
    pub fn new(config: &Config, engine_args: Vec<String>, program: &Program) -> Self {
        Self {
            engine: config.engine.clone(),
            engine_args,
            program: program.to_string(),
        }
    }

    /// Arguments handed to the engine, excluding the engine itself
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.engine_args
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.program.as_str()))
    }

    /// The command as it would be typed at a POSIX shell
    pub fn to_shell_line(&self) -> String {
        std::iter::once(self.engine.as_str())
            .chain(self.args())
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quote `arg` so a POSIX shell reads it back as a single word
pub fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-+=:,./@%".contains(c));
    if safe {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}
