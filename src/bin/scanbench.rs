use anyhow::Result;
use scanbench::cli::{actions, actions::Action, start};

// Main function
fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    match action {
        Action::Run { .. } => actions::run::handle(action)?,
    }

    Ok(())
}
