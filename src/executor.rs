use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::error::{Error, Result};
use crate::program::Invocation;

/// Run the engine with inherited standard streams and wait for it.
///
/// Returns the exit code the whole tool should finish with. Failing to start
/// the engine is the only error; whatever the engine itself reports is
/// passed through as its exit code.
pub fn execute(invocation: &Invocation) -> Result<i32> {
    let mut child = Command::new(&invocation.engine)
        .args(invocation.args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| Error::launch(invocation.engine.as_str(), e))?;

    let status = child.wait()?;
    debug!(%status, "engine finished");
    Ok(exit_code(status))
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
