// Renderers: each one writes a fixed block of text built from the profile
// and the active theme. They never fail on their own; only the writer can.

use crate::profile::{Profile, Tools};
use crate::theme::Theme;
use crossterm::style::{style, Stylize};
use std::io::{self, Write};

/// `--help` output. Uses fixed colours rather than the theme.
pub fn help<W: Write>(out: &mut W) -> io::Result<()> {
    let heading = |s: &'static str| style(s).dark_cyan();
    writeln!(out)?;
    writeln!(out, "{}", style("Dipesh Rajoria CLI Portfolio").bold())?;
    writeln!(out)?;
    writeln!(out, "{} dipesh-rajoria [options]", heading("Usage:"))?;
    writeln!(out)?;
    writeln!(out, "{}", heading("Options:"))?;
    writeln!(out, "  -h, --help           Show this help message")?;
    writeln!(out, "  -a, --about          Display 'About Me' section")?;
    writeln!(out, "  -m, --message        Show contact information")?;
    writeln!(out, "  -c, --collab         Show GitHub/LinkedIn collaboration info")?;
    writeln!(out)?;
    writeln!(out, "{}", heading("Examples:"))?;
    writeln!(out, "  dipesh-rajoria")?;
    writeln!(out, "  dipesh-rajoria --about")?;
    writeln!(out, "  dipesh-rajoria -m")?;
    writeln!(out, "  dipesh-rajoria -c")?;
    writeln!(out)?;
    Ok(())
}

/// The "About Me" block: bio, technology catalog, architecture, fun fact.
pub fn about<W: Write>(out: &mut W, profile: &Profile, theme: &Theme) -> io::Result<()> {
    let title = format!("👋 Hey there! I'm {}", profile.name);
    writeln!(out, "{}", theme.boxed(&title, theme.primary(&title).bold()))?;

    writeln!(out)?;
    labelled(out, theme, "📛 Pronouns: ", profile.pronouns)?;
    labelled(out, theme, "💻 Languages: ", profile.languages.join(", "))?;
    writeln!(out, "{}", theme.primary("💬 Ask Me About:"))?;
    for topic in profile.ask_me_about {
        writeln!(out, "{}{}", theme.accent("  • "), theme.secondary(topic))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", theme.primary("🧩 Technologies:"))?;
    let mut after_group = true;
    for category in profile.technologies {
        match category.tools {
            Tools::Grouped(groups) => {
                writeln!(out)?;
                writeln!(out, "{}", theme.accent(format!("  {} {}", category.icon, category.name)))?;
                for (key, tools) in groups {
                    labelled(out, theme, &format!("    {}: ", key), tools.join(", "))?;
                }
                after_group = true;
            }
            Tools::Flat(tools) => {
                if after_group {
                    writeln!(out)?;
                }
                labelled(
                    out,
                    theme,
                    &format!("  {} {}: ", category.icon, category.name),
                    tools.join(", "),
                )?;
                after_group = false;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", theme.primary("🏗️ Architecture:"))?;
    for (layer, styles) in profile.architecture {
        labelled(out, theme, &format!("  {}: ", layer), styles.join(", "))?;
    }

    writeln!(out)?;
    labelled(out, theme, "🎯 Current Focus: ", profile.current_focus)?;
    labelled(out, theme, "😂 Fun Fact: ", profile.fun_fact)?;
    writeln!(out)?;
    Ok(())
}

/// "Let's Collaborate": GitHub and LinkedIn.
pub fn collaboration<W: Write>(out: &mut W, profile: &Profile, theme: &Theme) -> io::Result<()> {
    let title = "🤝 Let's Collaborate!";
    writeln!(out, "{}", theme.boxed(title, theme.primary(title).bold()))?;
    labelled(out, theme, "🔗 GitHub: ", profile.links.github)?;
    labelled(out, theme, "🔗 LinkedIn: ", profile.links.linkedin)?;
    Ok(())
}

/// "Leave a Message": email and booking link.
pub fn contact<W: Write>(out: &mut W, profile: &Profile, theme: &Theme) -> io::Result<()> {
    let title = "💬 Leave a Message";
    writeln!(out, "{}", theme.boxed(title, theme.accent(title).bold()))?;
    labelled(out, theme, "📧 Email: ", profile.links.email)?;
    labelled(out, theme, "📅 Book a Call: ", profile.links.booking)?;
    Ok(())
}

pub fn farewell<W: Write>(out: &mut W, profile: &Profile, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        theme.accent(format!(
            "👋 I hope you enjoyed exploring my CLI portfolio! If you liked it, star me on GitHub: {} 🚀",
            profile.links.repository
        ))
    )?;
    writeln!(out)?;
    Ok(())
}

fn labelled<W: Write, V: std::fmt::Display>(
    out: &mut W,
    theme: &Theme,
    label: &str,
    value: V,
) -> io::Result<()> {
    writeln!(out, "{}{}", theme.primary(label), theme.secondary(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PROFILE;
    use regex::Regex;

    fn plain(render: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        render(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        Regex::new(r"\x1b\[[0-9;]*m").unwrap().replace_all(&text, "").into_owned()
    }

    #[test]
    fn test_about_contents() {
        let text = plain(|out| about(out, &PROFILE, &Theme::dark()));
        assert!(text.contains("Hey there! I'm Dipesh Rajoria"));
        assert!(text.contains("📛 Pronouns: He | Him"));
        assert!(text.contains("💻 Languages: TypeScript, Javascript, Python"));
        assert!(text.contains("  • performance optimization"));
        assert!(text.contains("    uiLibraries: shadcn, grauity (design and developed in house), Material UI, Ant Design, Chakra UI"));
        assert!(text.contains("  🤖 Generative AI: OpenAI, Prompt Engineering"));
        assert!(text.contains("  Back-End: microservices, monolithic, serverless"));
        assert!(text.contains(
            "😂 Fun Fact: I once debugged a memory leak that saved 8+ re-renders per keystroke!"
        ));
    }

    #[test]
    fn test_flat_categories_share_one_paragraph() {
        let text = plain(|out| about(out, &PROFILE, &Theme::dark()));
        assert!(text.contains(
            "    aws: EC2, SMS, S3, Lambda, CloudFront\n\n  🗃️ Databases: PostgreSQL, MongoDB, Firebase Realtime DB, redis\n  🔌 Misc:"
        ));
    }

    #[test]
    fn test_collaboration_and_contact() {
        let collab = plain(|out| collaboration(out, &PROFILE, &Theme::light()));
        assert!(collab.contains("🤝 Let's Collaborate!"));
        assert!(collab.contains("🔗 GitHub: https://github.com/DipeshRajoria007\n"));
        assert!(collab.contains("🔗 LinkedIn: https://www.linkedin.com/in/dipeshrajoria/"));

        let contact = plain(|out| contact(out, &PROFILE, &Theme::light()));
        assert!(contact.contains("💬 Leave a Message"));
        assert!(contact.contains("📧 Email: dipeshrajoria45@gmail.com"));
        assert!(contact.contains("📅 Book a Call: https://calendly.com/dipeshrajoria"));
    }

    #[test]
    fn test_help_lists_every_flag() {
        let text = plain(|out| help(out));
        assert!(text.contains("Dipesh Rajoria CLI Portfolio"));
        for flag in ["-h, --help", "-a, --about", "-m, --message", "-c, --collab"] {
            assert!(text.contains(flag), "missing {flag}");
        }
    }

    #[test]
    fn test_help_headings_use_plain_cyan() {
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let mut buf = Vec::new();
        help(&mut buf).unwrap();
        let raw = String::from_utf8(buf).unwrap();
        assert!(raw.contains("\x1b[38;5;6mUsage:"), "{raw:?}");
        assert!(!raw.contains("\x1b[38;5;14m"));
    }

    #[test]
    fn test_farewell_links_repository() {
        let text = plain(|out| farewell(out, &PROFILE, &Theme::dark()));
        assert!(text.contains("star me on GitHub: https://github.com/DipeshRajoria007/dipesh-rajoria 🚀"));
    }
}
