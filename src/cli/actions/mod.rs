pub mod run;

use crate::cli::config::Step;
use anyhow::Result;
use std::process::ExitStatus;
use tokio::process::Command;

#[derive(Debug)]
pub enum Action {
    Run {
        steps: Vec<Step>,
        start_time: Option<f64>,
    },
}

async fn execute_command(shell: &str, cmd: &str) -> Result<i32> {
    // stdout is reserved for the stopwatch record
    let status = Command::new(shell)
        .arg("-c")
        .arg(cmd)
        .stdout(std::io::stderr())
        .status()
        .await?;

    Ok(exit_code(status))
}

/// Exit code of a finished step, `128 + signal` like shells do when it was killed
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
