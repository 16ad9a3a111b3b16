// Banner: the author's name as FIGlet text art, painted with the theme
// gradient before the menu starts.

use crate::profile::Profile;
use crate::theme::Theme;
use figlet_rs::FIGfont;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BannerError {
    #[error("failed to load FIGlet font: {0}")]
    FontLoad(String),
    #[error("cannot render {0:?} with the FIGlet font")]
    Render(String),
    #[error("banner task did not complete")]
    Task(#[from] tokio::task::JoinError),
}

/// Render `text` with the standard FIGlet font.
pub fn figlet(text: &str) -> Result<String, BannerError> {
    if text.trim().is_empty() {
        return Err(BannerError::Render(text.to_string()));
    }
    let font = FIGfont::standard().map_err(BannerError::FontLoad)?;
    let figure = font
        .convert(text)
        .ok_or_else(|| BannerError::Render(text.to_string()))?;
    Ok(figure.to_string())
}

/// Async wrapper around [`figlet`]. Font parsing runs on the blocking pool.
pub async fn render_banner(text: &str) -> Result<String, BannerError> {
    let text = text.to_owned();
    tokio::task::spawn_blocking(move || figlet(&text)).await?
}

/// Print the painted banner framed by blank lines.
pub async fn display_title<W: Write>(
    out: &mut W,
    profile: &Profile,
    theme: &Theme,
) -> anyhow::Result<()> {
    let art = render_banner(profile.name).await?;
    log::debug!("banner rendered: {} lines", art.lines().count());
    writeln!(out, "\n")?;
    writeln!(out, "{}", theme.gradient.paint(&art))?;
    writeln!(out, "\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figlet_is_multiline_art() {
        let art = figlet("Dipesh Rajoria").unwrap();
        assert!(art.lines().count() >= 5, "{art}");
        assert!(art.lines().any(|l| l.trim().len() > 20));
    }

    #[tokio::test]
    async fn test_render_banner_matches_sync_render() {
        let art = render_banner("Dipesh Rajoria").await.unwrap();
        assert_eq!(art, figlet("Dipesh Rajoria").unwrap());
    }

    #[test]
    fn test_blank_text_cannot_be_rendered() {
        for text in ["", "   "] {
            match figlet(text) {
                Err(BannerError::Render(rejected)) => assert_eq!(rejected, text),
                other => panic!("expected a render error for {text:?}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_render_banner_passes_errors_through() {
        let err = render_banner("").await.unwrap_err();
        assert!(matches!(err, BannerError::Render(_)), "{err:?}");
    }

    #[test]
    fn test_error_messages() {
        let err = BannerError::Render("x".into());
        assert_eq!(err.to_string(), "cannot render \"x\" with the FIGlet font");
        let err = BannerError::FontLoad("bad header".into());
        assert!(err.to_string().contains("bad header"));
    }
}
