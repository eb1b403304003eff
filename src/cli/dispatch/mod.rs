use crate::cli::{
    actions::Action,
    config::{Config, Step},
};
use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let config = matches
        .get_one::<PathBuf>("config")
        .map(|path| Config::new(path.to_path_buf()))
        .transpose()?;

    // --start-time wins over the config file
    let start_time = match matches.get_one::<f64>("start-time") {
        Some(start_time) => Some(*start_time),
        None => match &config {
            Some(config) => config.start_time()?,
            None => None,
        },
    };

    let mut steps: Vec<Step> = config.map(|config| config.steps).unwrap_or_default();

    if let Some(cmds) = matches.get_many::<String>("step") {
        steps.extend(cmds.map(Step::from_cmd));
    }

    if steps.is_empty() {
        return Err(anyhow!("No steps to time"));
    }

    Ok(Action::Run { steps, start_time })
}
