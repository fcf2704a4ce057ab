use std::env;
use std::ffi::OsString;
use std::io;
use std::process;

use tracing::Level;

use pawk::{Config, Error};

fn main() {
    let config = Config::from_env();
    init_logging(&config);

    match run(env::args_os().skip(1), &config) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("pawk: {}", e);
            if matches!(e, Error::Usage { .. }) {
                eprintln!("Try 'pawk --help' for more information.");
            }
            process::exit(e.exit_code());
        }
    }
}

fn init_logging(config: &Config) {
    let level = if config.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn run(args: impl IntoIterator<Item = OsString>, config: &Config) -> pawk::Result<i32> {
    let args = pawk::utf8_args(args)?;

    if let [only] = args.as_slice() {
        match only.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(0);
            }
            "--version" => {
                println!("pawk {}", env!("CARGO_PKG_VERSION"));
                return Ok(0);
            }
            _ => {}
        }
    }

    let invocation = pawk::compile(&args, config)?;
    pawk::execute(&invocation)
}

fn print_help() {
    print!(
        "{}",
        r#"Usage: pawk [awk-options ...] [--] spec ...

Print fields of each input line without writing an AWK program.
Each spec argument becomes one output column; columns are joined with the
field separator.

Spec syntax:
  N            field N (0 is the whole line)
  -N           N-th field from the end (-1 is the last field)
  %N  %{N}     field N, usable next to other digits
  %{A:B}       fields A through B joined by the separator;
               A or B may be negative or omitted (first/last field)
  @N  @{text}  literal number or text, printed as-is
  @@  %%       literal @ and %
  anything else is printed literally

Options before the first spec argument are passed to awk. Use -- when an
option takes a separate value, e.g. pawk -F . -- 1 3

Environment:
  PAWK_DEBUG   when set, print tokens and the generated program to stderr
  PAWK_AWK     awk binary to run (default: awk)

Examples:
  pawk 1 3                  < file
  pawk -F: -- -1 1          < /etc/passwd
  pawk '%{2:}'              < file
  pawk '1=@{[}2@{]}'        < file
"#
    );
}
