use crate::cli::{
    actions::{scan, Action},
    cases::CASES,
    fixtures::FixtureLoader,
};
use anyhow::Result;
use tracing::{debug, instrument};

static APP_ID: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Handle the run action
#[instrument(skip(action))]
pub fn handle(action: Action) -> Result<()> {
    let Action::Run { ascii } = action;

    let mut loader = FixtureLoader::new(ascii);

    debug!(fixture = %loader.path().display(), "selected fixture");

    println!("scan bench for {APP_ID}");

    for case in CASES {
        // degraded input (missing fixture) benches an empty corpus
        let text = loader.load().unwrap_or_default();

        scan::bench(case.name, case.pattern, &text)?;
    }

    Ok(())
}
