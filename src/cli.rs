// Entry dispatcher: turns the command line into one `Action` and runs it.

use crate::banner;
use crate::config::Config;
use crate::profile::Profile;
use crate::render;
use crate::ui::{self, MenuPrompt};
use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;

/// Tokens that mean something to us. Anything else on the command line is
/// dropped before clap sees it.
const KNOWN_FLAGS: [&str; 8] = [
    "--help", "-h", "--about", "-a", "--message", "-m", "--collab", "-c",
];

#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "dipesh-rajoria",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Show the help message
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Display the 'About Me' section
    #[arg(short, long)]
    pub about: bool,

    /// Show contact information
    #[arg(short, long)]
    pub message: bool,

    /// Show GitHub/LinkedIn collaboration info
    #[arg(short, long)]
    pub collab: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Help,
    About,
    Message,
    Collab,
    Interactive,
}

impl Cli {
    /// When several flags are given, the first in help → about → message →
    /// collab order wins, wherever it appears on the command line.
    pub fn action(&self) -> Action {
        if self.help {
            Action::Help
        } else if self.about {
            Action::About
        } else if self.message {
            Action::Message
        } else if self.collab {
            Action::Collab
        } else {
            Action::Interactive
        }
    }
}

/// Parse `args` (program name first). Unknown arguments are ignored; a flag
/// given more than once, under either spelling, counts once.
pub fn parse_args<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    for arg in args {
        match arg.to_str() {
            Some(flag) if KNOWN_FLAGS.contains(&flag) => {
                if !kept.contains(&arg) {
                    kept.push(arg);
                }
            }
            _ => log::debug!("ignoring argument {:?}", arg),
        }
    }

    Cli::try_parse_from(kept).unwrap_or_else(|err| {
        log::warn!("could not parse flags, starting interactive mode: {}", err);
        Cli::default()
    })
}

/// Run `action`. Flag actions print one block and return; interactive
/// mode shows the banner and the menu until the user exits.
pub async fn dispatch<W: Write, P: MenuPrompt>(
    action: Action,
    out: &mut W,
    prompt: &mut P,
    profile: &Profile,
    config: &Config,
) -> Result<()> {
    let theme = &config.theme;
    log::debug!("dispatching {:?}", action);
    match action {
        Action::Help => render::help(out)?,
        Action::About => {
            ui::show_about(out, profile, theme, config.loading_delay).await?;
            render::farewell(out, profile, theme)?;
        }
        Action::Message => {
            render::contact(out, profile, theme)?;
            render::farewell(out, profile, theme)?;
        }
        Action::Collab => {
            render::collaboration(out, profile, theme)?;
            render::farewell(out, profile, theme)?;
        }
        Action::Interactive => {
            banner::display_title(out, profile, theme).await?;
            ui::main_menu(out, prompt, profile, config).await?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> Action {
        let mut argv = vec!["dipesh-rajoria"];
        argv.extend_from_slice(args);
        parse_args(argv).action()
    }

    #[test]
    fn test_each_flag() {
        assert_eq!(action(&["--help"]), Action::Help);
        assert_eq!(action(&["-h"]), Action::Help);
        assert_eq!(action(&["--about"]), Action::About);
        assert_eq!(action(&["-a"]), Action::About);
        assert_eq!(action(&["--message"]), Action::Message);
        assert_eq!(action(&["-m"]), Action::Message);
        assert_eq!(action(&["--collab"]), Action::Collab);
        assert_eq!(action(&["-c"]), Action::Collab);
        assert_eq!(action(&[]), Action::Interactive);
    }

    #[test]
    fn test_first_match_wins_regardless_of_position() {
        assert_eq!(action(&["-c", "-m", "-a", "-h"]), Action::Help);
        assert_eq!(action(&["--collab", "--about"]), Action::About);
        assert_eq!(action(&["-c", "--message"]), Action::Message);
    }

    #[test]
    fn test_unknown_arguments_are_ignored() {
        assert_eq!(action(&["--verbose"]), Action::Interactive);
        assert_eq!(action(&["hello", "-x", "--collab"]), Action::Collab);
        assert_eq!(action(&["-ac"]), Action::Interactive);
        assert_eq!(action(&["--about=yes"]), Action::Interactive);
        assert_eq!(action(&["--", "-m"]), Action::Message);
    }

    #[test]
    fn test_repeated_flags() {
        assert_eq!(action(&["-a", "-a", "--about"]), Action::About);
        assert_eq!(action(&["--about", "-a"]), Action::About);
        assert_eq!(action(&["--help", "-h"]), Action::Help);
        assert_eq!(action(&["-m", "--message", "-c", "--collab"]), Action::Message);
    }

    #[test]
    fn test_short_and_long_spellings_set_one_field() {
        let cli = parse_args(["dipesh-rajoria", "-c", "--collab", "--message", "-m"]);
        assert_eq!(
            cli,
            Cli {
                help: false,
                about: false,
                message: true,
                collab: true,
            }
        );
    }
}
