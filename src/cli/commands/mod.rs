use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("scanbench")
        .about("Regular expression scan benchmark ⏱")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("ascii")
                .long("ascii")
                .help("Benchmark against the ASCII-only fixture")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase verbosity, -vv for debug")
                .action(ArgAction::Count),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_defaults() -> Result<()> {
        let matches = new().try_get_matches_from(["scanbench"]);

        assert!(matches.is_ok());

        let m = matches.unwrap();

        assert!(!m.get_flag("ascii"));

        assert_eq!(m.get_count("verbose"), 0);

        Ok(())
    }

    #[test]
    fn test_ascii() -> Result<()> {
        let matches = new().try_get_matches_from(["scanbench", "--ascii"]);

        assert!(matches.is_ok());

        let m = matches.unwrap();

        assert!(m.get_flag("ascii"));

        Ok(())
    }

    #[test]
    fn test_verbose() -> Result<()> {
        let matches = new().try_get_matches_from(["scanbench", "-vv"]);

        assert!(matches.is_ok());

        let m = matches.unwrap();

        assert!(!m.get_flag("ascii"));

        assert_eq!(m.get_count("verbose"), 2);

        Ok(())
    }

    #[test]
    fn test_unknown_flag() -> Result<()> {
        let matches = new().try_get_matches_from(["scanbench", "--fixture", "x.txt"]);

        assert!(matches.is_err());

        Ok(())
    }
}
