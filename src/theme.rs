// Colour presets. A `Theme` is picked once at startup and handed to every
// renderer by reference.

use crossterm::style::{style, Color, StyledContent, Stylize};
use std::fmt::Display;
use unicode_width::UnicodeWidthStr;

/// Environment variable read to choose the preset.
pub const THEME_ENV_VAR: &str = "TERM_THEME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Only the exact value `light` selects the light preset.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }
}

/// Colour ramp applied to the banner, one colour per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    Pastel,
    Rainbow,
}

impl Gradient {
    /// Colour at position `t` in `[0, 1]`.
    pub fn color_at(self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        match self {
            Gradient::Pastel => {
                let (from, to) = ((116.0, 235.0, 213.0), (172.0, 182.0, 229.0));
                Color::Rgb {
                    r: lerp(from.0, to.0, t),
                    g: lerp(from.1, to.1, t),
                    b: lerp(from.2, to.2, t),
                }
            }
            // Stops at violet so both ends of the ramp stay distinct.
            Gradient::Rainbow => hsv_to_rgb(300.0 * t, 1.0, 1.0),
        }
    }

    /// Paint every non-whitespace character of `text`. All lines share the
    /// same ramp, stretched across the widest line.
    pub fn paint(self, text: &str) -> String {
        let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let span = width.saturating_sub(1).max(1) as f32;

        let mut painted = String::with_capacity(text.len() * 8);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                painted.push('\n');
            }
            for (col, ch) in line.chars().enumerate() {
                if ch.is_whitespace() {
                    painted.push(ch);
                } else {
                    let color = self.color_at(col as f32 / span);
                    painted.push_str(&style(ch).with(color).to_string());
                }
            }
        }
        painted
    }
}

fn lerp(from: f32, to: f32, t: f32) -> u8 {
    (from + (to - from) * t).round() as u8
}

fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Color {
    let c = value * saturation;
    let h = (hue % 360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = value - c;
    let channel = |v: f32| ((v + m) * 255.0).round() as u8;
    Color::Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub gradient: Gradient,
    pub border: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            kind: ThemeKind::Dark,
            primary: Color::Cyan,
            secondary: Color::Grey,
            accent: Color::Magenta,
            gradient: Gradient::Pastel,
            border: Color::DarkCyan,
        }
    }

    pub fn light() -> Self {
        Theme {
            kind: ThemeKind::Light,
            primary: Color::DarkBlue,
            secondary: Color::Black,
            accent: Color::DarkMagenta,
            gradient: Gradient::Rainbow,
            border: Color::DarkBlue,
        }
    }

    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }

    pub fn primary<D: Display>(&self, content: D) -> StyledContent<D> {
        style(content).with(self.primary)
    }

    pub fn secondary<D: Display>(&self, content: D) -> StyledContent<D> {
        style(content).with(self.secondary)
    }

    pub fn accent<D: Display>(&self, content: D) -> StyledContent<D> {
        style(content).with(self.accent)
    }

    /// Rounded box around `title`, boxen style: one blank line of padding
    /// above and below, three columns left and right.
    ///
    /// `title` is the plain text used for measuring, `styled` is what gets
    /// printed inside the box.
    pub fn boxed<D: Display>(&self, title: &str, styled: D) -> String {
        const PAD_X: usize = 3;
        let inner = title.width() + PAD_X * 2;
        let rule = "─".repeat(inner);
        let side = style("│").with(self.border);
        let blank = " ".repeat(inner);
        let pad = " ".repeat(PAD_X);

        [
            style(format!("╭{}╮", rule)).with(self.border).to_string(),
            format!("{side}{blank}{side}"),
            format!("{side}{pad}{styled}{pad}{side}"),
            format!("{side}{blank}{side}"),
            style(format!("╰{}╯", rule)).with(self.border).to_string(),
        ]
        .join("\n")
    }
}
