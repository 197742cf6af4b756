//! Colour palette and styling functions for relmo output.
//!
//! A dark "neon" palette: accent headings, red errors and a bold yellow
//! result on a purple band. Every function takes an explicit `color` flag so
//! rendering never consults global state.

use owo_colors::OwoColorize;

// ---------------------------------------------------------------------------
// Palette (RGB values)
// ---------------------------------------------------------------------------

const ACCENT: (u8, u8, u8) = (0x99, 0x33, 0xcc); // #9933cc - violet
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const RESULT_TEXT: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const RESULT_BG: (u8, u8, u8) = (0x5e, 0x2e, 0x8f); // #5e2e8f - deep purple
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray

/// Padding on both sides of the result band.
pub const RESULT_MARGIN: &str = "  ";

pub const ICON_INFO: &str = "\u{2139}"; // ℹ

pub const SEPARATOR_LIGHT: &str = "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn color_str(s: &str, rgb: (u8, u8, u8), color: bool) -> String {
    if color {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: (u8, u8, u8), color: bool) -> String {
    if color {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

/// Section heading (`--- Result ---`).
pub fn render_heading(s: &str, color: bool) -> String {
    color_bold_str(s, ACCENT, color)
}

/// Error line.
pub fn render_error(s: &str, color: bool) -> String {
    color_bold_str(s, FAIL, color)
}

/// The meeting-time line: bold yellow on the purple band, indented.
pub fn render_result(s: &str, color: bool) -> String {
    let line = format!("{RESULT_MARGIN}{s}{RESULT_MARGIN}");
    if color {
        line.truecolor(RESULT_TEXT.0, RESULT_TEXT.1, RESULT_TEXT.2)
            .on_truecolor(RESULT_BG.0, RESULT_BG.1, RESULT_BG.2)
            .bold()
            .to_string()
    } else {
        line
    }
}

/// Secondary notices (prompts help, "transcript cleared").
pub fn render_muted(s: &str, color: bool) -> String {
    color_str(s, MUTED, color)
}

pub fn render_info_icon(color: bool) -> String {
    color_str(ICON_INFO, ACCENT, color)
}

/// Renders the light separator line in muted colour.
pub fn render_separator(color: bool) -> String {
    render_muted(SEPARATOR_LIGHT, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_rendering_is_unchanged_text() {
        assert_eq!(render_heading("--- Result ---", false), "--- Result ---");
        assert_eq!(render_error("Error: x", false), "Error: x");
        assert_eq!(render_muted("note", false), "note");
        assert_eq!(render_info_icon(false), ICON_INFO);
    }

    #[test]
    fn result_band_has_margins_even_without_color() {
        assert_eq!(render_result("r", false), "  r  ");
    }

    #[test]
    fn colored_rendering_wraps_in_escape_codes() {
        let s = render_error("boom", true);
        assert!(s.contains("boom"));
        assert!(s.starts_with('\u{1b}'));
        assert_ne!(s, "boom");

        let r = render_result("1.500", true);
        // Background colour sequence for the purple band.
        assert!(r.contains("48;2;94;46;143"));
    }
}
