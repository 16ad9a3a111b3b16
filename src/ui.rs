// UI layer: the interactive menu (via `dialoguer`) and the loading spinner
// shown before the About block.

use crate::config::Config;
use crate::profile::Profile;
use crate::render;
use crate::theme::Theme;
use anyhow::{anyhow, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    About,
    Collaborate,
    Message,
    Exit,
}

impl MenuChoice {
    /// Menu order.
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::About,
        MenuChoice::Collaborate,
        MenuChoice::Message,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::About => "About Me",
            MenuChoice::Collaborate => "Let's Collaborate",
            MenuChoice::Message => "Leave a Message",
            MenuChoice::Exit => "Exit",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            MenuChoice::About => "🧑‍💻",
            MenuChoice::Collaborate => "🤝",
            MenuChoice::Message => "💬",
            MenuChoice::Exit => "❌",
        }
    }

    /// Text shown in the select list.
    pub fn item(self) -> String {
        format!("{} {}", self.icon(), self.label())
    }
}

/// Something that can ask the user to pick one of `items`, returning its
/// index. Blocks until an answer is given.
pub trait MenuPrompt {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize>;
}

/// Keyboard-driven select list on the terminal.
pub struct DialoguerPrompt;

impl MenuPrompt for DialoguerPrompt {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(selection)
    }
}

/// Main interactive menu. Loops until the user picks "Exit", after which
/// the farewell is printed and control returns to the caller.
pub async fn main_menu<W: Write, P: MenuPrompt>(
    out: &mut W,
    prompt: &mut P,
    profile: &Profile,
    config: &Config,
) -> Result<()> {
    let theme = &config.theme;
    let question = theme.primary("What would you like to know?").to_string();
    let items: Vec<String> = MenuChoice::ALL.iter().map(|c| c.item()).collect();

    loop {
        let index = prompt.select(&question, &items)?;
        let choice = *MenuChoice::ALL
            .get(index)
            .ok_or_else(|| anyhow!("menu selection {} out of range", index))?;
        log::debug!("menu choice: {:?}", choice);

        match choice {
            MenuChoice::About => show_about(out, profile, theme, config.loading_delay).await?,
            MenuChoice::Collaborate => render::collaboration(out, profile, theme)?,
            MenuChoice::Message => render::contact(out, profile, theme)?,
            MenuChoice::Exit => {
                render::farewell(out, profile, theme)?;
                out.flush()?;
                break;
            }
        }
        out.flush()?;
    }
    Ok(())
}

/// Spin for `delay`, then print the About block.
pub async fn show_about<W: Write>(
    out: &mut W,
    profile: &Profile,
    theme: &Theme,
    delay: Duration,
) -> Result<()> {
    let spinner = spinner(theme.primary("Loading profile...").to_string());
    tokio::time::sleep(delay).await;
    spinner.finish_and_clear();
    render::about(out, profile, theme)?;
    Ok(())
}

fn spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style =
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Wipe the screen before the banner. No-op when stdout is redirected.
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    if stdout.is_tty() {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    Ok(())
}
