use std::env;

// Define the global arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Print the record as indented JSON
    pub pretty: bool,
    /// Shell used to run the steps, `$SHELL` or `sh`
    pub shell: String,
}

impl Default for GlobalArgs {
    fn default() -> Self {
        Self {
            pretty: false,
            shell: default_shell(),
        }
    }
}

impl GlobalArgs {
    #[must_use]
    pub fn new(matches: &clap::ArgMatches) -> Self {
        Self {
            pretty: matches.get_flag("pretty"),
            shell: default_shell(),
        }
    }
}

fn default_shell() -> String {
    env::var("SHELL").unwrap_or_else(|_| "sh".to_string())
}
