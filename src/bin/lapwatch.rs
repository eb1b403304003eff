use anyhow::Result;
use lapwatch::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    let exit_code = match action {
        Action::Run { .. } => actions::run::handle(action, globals).await?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
