//! pawk - print fields with AWK without writing AWK
//!
//! This crate compiles a terse print specification into an AWK program and
//! runs it. Bare numbers pick fields, negative numbers count from the last
//! field, `%{a:b}` prints an inclusive span of fields, and everything else
//! is printed literally.
//!
//! # Example
//!
//! ```
//! use pawk::{Config, compile};
//!
//! let args: Vec<String> = ["-F:", "-1", "1"].iter().map(|s| s.to_string()).collect();
//! let invocation = compile(&args, &Config::default()).unwrap();
//!
//! assert_eq!(invocation.engine, "awk");
//! assert_eq!(invocation.engine_args, vec!["-F:".to_string()]);
//! assert!(invocation.program.ends_with("{ print (NF < 1 ? \"\" : $NF), $1 }\n"));
//! ```
//!
//! # Pipeline Example
//!
//! The individual stages can be driven by hand:
//!
//! ```
//! use pawk::{Lexer, Program, compile_group};
//!
//! let tokens = Lexer::new("%{2:}=@{!}").tokenize().unwrap();
//! let fragments = compile_group(&tokens).unwrap();
//! let program = Program::from_groups(vec![fragments]);
//!
//! assert!(program.to_string().ends_with("{ print _pawk_range(2, NF) \"=\" \"!\" }\n"));
//! ```
//!
//! # Syntax Errors
//!
//! ```
//! use pawk::{Config, Error, compile};
//!
//! let args = vec!["%{1something}1".to_string()];
//! let err = compile(&args, &Config::default()).unwrap_err();
//! assert!(matches!(err, Error::Syntax { .. }));
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod executor;
pub mod lexer;
pub mod partition;
pub mod program;

pub use compiler::{Fragment, compile_group, compile_token};
pub use config::Config;
pub use error::{Error, Result};
pub use executor::execute;
pub use lexer::{FieldIndex, Lexer, Token, TokenKind};
pub use partition::{Partition, partition, utf8_args};
pub use program::{Invocation, Program};

use tracing::debug;

/// Compile raw command-line arguments into an engine invocation.
///
/// Partitions the arguments, tokenizes and compiles every print-specification
/// argument in order, and assembles the program. Nothing is launched.
pub fn compile(args: &[String], config: &Config) -> Result<Invocation> {
    let Partition {
        engine_args,
        dsl_args,
    } = partition(args);

    if config.debug {
        debug!(?engine_args, ?dsl_args, "partitioned arguments");
    }

    let mut groups = Vec::with_capacity(dsl_args.len());
    for arg in &dsl_args {
        let tokens = Lexer::new(arg).tokenize()?;
        if config.debug {
            let kinds: Vec<&TokenKind> = tokens.iter().map(|t| &t.kind).collect();
            debug!(arg = %arg, tokens = ?kinds, "tokenized");
        }
        groups.push(compile_group(&tokens)?);
    }

    let program = Program::from_groups(groups);
    let invocation = Invocation::new(config, engine_args, &program);

    if config.debug {
        debug!("generated program:\n{}", invocation.program);
        debug!("command: {}", invocation.to_shell_line());
    }

    Ok(invocation)
}
