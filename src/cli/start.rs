use crate::cli::{actions::Action, commands, dispatch::handler, globals::GlobalArgs, telemetry};
use anyhow::Result;

/// Start the CLI
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = commands::new().get_matches();

    let verbosity = telemetry::verbosity_level(matches.get_count("verbose"));

    telemetry::init(Some(verbosity))?;

    let global_args = GlobalArgs::new(&matches);

    let action = handler(&matches)?;

    Ok((action, global_args))
}
