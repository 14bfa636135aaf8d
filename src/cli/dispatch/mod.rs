use crate::cli::actions::Action;
use anyhow::Result;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let ascii = matches.get_flag("ascii");

    Ok(Action::Run { ascii })
}
