use crate::{
    cli::{
        actions::{execute_command, Action},
        config::Step,
        globals::GlobalArgs,
    },
    stopwatch::{system_time, StopWatch},
};
use anyhow::{Context, Result};
use tracing::{error, info, instrument};

/// Handle the run action, prints the stopwatch and returns the exit code
#[instrument(skip(action, globals))]
pub async fn handle(action: Action, globals: GlobalArgs) -> Result<i32> {
    let Action::Run { steps, start_time } = action;

    let (watch, exit_code) = time_steps(&steps, start_time, &globals.shell, system_time).await?;

    let output = if globals.pretty {
        watch.to_string_pretty()?
    } else {
        watch.serialize()
    };

    println!("{output}");

    Ok(exit_code)
}

/// Runs the steps one after the other recording a lap when each one finishes.
///
/// Stops at the first failing step, its lap gets a `_failed` suffix and its
/// exit code is returned along with the stopped watch.
pub async fn time_steps<F>(
    steps: &[Step],
    start_time: Option<f64>,
    shell: &str,
    time_source: F,
) -> Result<(StopWatch, i32)>
where
    F: Fn() -> f64 + 'static,
{
    let mut watch = match start_time {
        Some(start_time) => StopWatch::with_start_time(start_time, time_source)?,
        None => StopWatch::with_time_source(time_source),
    };

    let mut exit_code = 0;

    for step in steps {
        let code = execute_command(shell, &step.cmd)
            .await
            .with_context(|| format!("Failed to run step: {}", step.lap_name()))?;

        if code == 0 {
            let lap = watch.lap(step.lap_name());

            info!(
                step = step.lap_name(),
                cmd = %step.cmd,
                lap_time_stamp = lap.timestamp
            );
        } else {
            let lap = watch.lap(format!("{}_failed", step.lap_name()));

            error!(
                step = step.lap_name(),
                cmd = %step.cmd,
                exit_code = code,
                lap_time_stamp = lap.timestamp
            );

            exit_code = code;
            break;
        }
    }

    watch.stop();

    info!(total_time = ?watch.total(), laps = watch.laps().len());

    Ok((watch, exit_code))
}
