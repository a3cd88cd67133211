//! Rendering of formatted MOTDs and status reports.
//!
//! Spans can be rendered as ANSI-colored terminal text, as HTML using
//! `<font color>` tags, or as plain text with colors discarded.

use crate::motd::{self, ColorCode, StyledSpan};
use crate::status::ServerStatus;
use owo_colors::{AnsiColors, OwoColorize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Placeholder shown for missing MOTD or version.
const NOT_AVAILABLE: &str = "N/A";

/// Output surface for rendered text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// 16-color ANSI escape sequences
    #[default]
    Ansi,
    /// HTML with `<font color="#rrggbb">` tags
    Html,
    /// Text only
    Plain,
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ansi" => Ok(Self::Ansi),
            "html" => Ok(Self::Html),
            "plain" => Ok(Self::Plain),
            other => Err(format!("unknown format '{}', expected ansi, html or plain", other)),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ansi => "ansi",
            Self::Html => "html",
            Self::Plain => "plain",
        })
    }
}

/// Closest terminal color for each legacy color.
fn ansi_color(color: ColorCode) -> AnsiColors {
    match color {
        ColorCode::Black => AnsiColors::Black,
        ColorCode::DarkBlue => AnsiColors::Blue,
        ColorCode::DarkGreen => AnsiColors::Green,
        ColorCode::DarkAqua => AnsiColors::Cyan,
        ColorCode::DarkRed => AnsiColors::Red,
        ColorCode::DarkPurple => AnsiColors::Magenta,
        ColorCode::Gold => AnsiColors::Yellow,
        ColorCode::Gray => AnsiColors::White,
        ColorCode::DarkGray => AnsiColors::BrightBlack,
        ColorCode::Blue => AnsiColors::BrightBlue,
        ColorCode::Green => AnsiColors::BrightGreen,
        ColorCode::Aqua => AnsiColors::BrightCyan,
        ColorCode::Red => AnsiColors::BrightRed,
        ColorCode::LightPurple => AnsiColors::BrightMagenta,
        ColorCode::Yellow => AnsiColors::BrightYellow,
        ColorCode::White => AnsiColors::BrightWhite,
    }
}

/// Remove control characters other than `\n` from server-supplied text.
///
/// Keeps escape sequences in a MOTD from reaching the terminal.
fn strip_controls(text: &str) -> Cow<'_, str> {
    if text.chars().any(|c| c.is_control() && c != '\n') {
        Cow::Owned(text.chars().filter(|&c| !c.is_control() || c == '\n').collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Render spans with ANSI foreground colors.
pub fn to_ansi(spans: &[StyledSpan]) -> String {
    spans
        .iter()
        .map(|span| {
            let text = strip_controls(&span.text);
            match span.color {
                Some(color) => text.color(ansi_color(color)).to_string(),
                None => text.into_owned(),
            }
        })
        .collect()
}

/// Render spans as HTML.
///
/// Text is escaped; each colored span, including zero-length ones, becomes a
/// `<font>` element so the color of every span survives.
pub fn to_html(spans: &[StyledSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        let text = strip_controls(&span.text);
        let text = html_escape::encode_text(&text);
        match span.color {
            Some(color) => {
                out.push_str("<font color=\"");
                out.push_str(&color.hex());
                out.push_str("\">");
                out.push_str(&text);
                out.push_str("</font>");
            }
            None => out.push_str(&text),
        }
    }
    out
}

/// Render spans as plain text, keeping line breaks.
pub fn to_plain(spans: &[StyledSpan]) -> String {
    strip_controls(&motd::visible_text(spans)).into_owned()
}

/// Render spans for the given surface.
pub fn render_spans(spans: &[StyledSpan], mode: RenderMode) -> String {
    match mode {
        RenderMode::Ansi => to_ansi(spans),
        RenderMode::Html => to_html(spans),
        RenderMode::Plain => to_plain(spans),
    }
}

/// A formatted server status, ready for display or forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Formatted MOTD, `None` when the server did not report one
    pub motd: Option<Vec<StyledSpan>>,
    pub players_online: u32,
    pub players_max: u32,
    pub version: Option<String>,
}

impl StatusReport {
    /// Format a fetched status.
    ///
    /// Missing player counts are shown as zero.
    pub fn from_status(status: &ServerStatus) -> Self {
        Self {
            motd: status.motd.as_ref().map(motd::format_motd),
            players_online: status.players_online.unwrap_or(0),
            players_max: status.players_max.unwrap_or(0),
            version: status.version.clone(),
        }
    }

    /// The MOTD as plain text, or `N/A`.
    pub fn motd_plain(&self) -> String {
        self.motd
            .as_deref()
            .map(to_plain)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// `online/max`.
    pub fn players(&self) -> String {
        format!("{}/{}", self.players_online, self.players_max)
    }

    /// The version string with control characters removed, or `N/A`.
    pub fn version_or_na(&self) -> Cow<'_, str> {
        match &self.version {
            Some(version) => strip_controls(version),
            None => Cow::Borrowed(NOT_AVAILABLE),
        }
    }

    /// Render the report as three lines: MOTD, players and version.
    pub fn render(&self, mode: RenderMode) -> String {
        let motd = match &self.motd {
            Some(spans) => render_spans(spans, mode),
            None => NOT_AVAILABLE.to_string(),
        };
        format!(
            "Motd: {}\nPlayers: {}\nVersion: {}",
            motd,
            self.players(),
            self.version_or_na()
        )
    }
}
