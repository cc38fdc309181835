//! # Rendering
//!
//! Turns a [`SequenceLayout`] into the markup a scrolling note strip is
//! built from, or into JSON for a script-driven UI.
//!
//! Each note becomes a `song-note` element whose CSS custom properties carry
//! the four layout numbers:
//!
//! ```text
//! --note-x:112px;--note-width:112px;--note-start:1.50s;--note-duration:1.50s
//! ```
//!
//! Pixels are printed with no decimals and seconds with two, which is what
//! the stylesheet's `calc()` expressions expect.

use serde::Serialize;

use crate::error::LayoutError;
use crate::layout::SequenceLayout;
use crate::song::ViolinNote;

/// Text shown inside a note box.
///
/// `label` is the large text (the pitch); `meta` is a list of
/// `(class suffix, text)` pairs rendered underneath it.
pub trait NoteLabel {
    fn label(&self) -> String;

    fn meta(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

impl NoteLabel for ViolinNote {
    fn label(&self) -> String {
        self.pitch.clone()
    }

    fn meta(&self) -> Vec<(&'static str, String)> {
        let mut meta = Vec::new();
        if let Some(finger) = self.finger {
            meta.push(("finger", format!("Finger {}", finger)));
        }
        if let Some(string) = &self.string {
            meta.push(("string", format!("{} string", string)));
        }
        if let Some(bow) = self.bow {
            meta.push(("bow", bow.to_string()));
        }
        meta
    }
}

impl NoteLabel for &str {
    fn label(&self) -> String {
        self.to_string()
    }
}

impl NoteLabel for String {
    fn label(&self) -> String {
        self.clone()
    }
}

/// Options for [`render_note_strip`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces before each top-level `song-note` line
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent: 10 }
    }
}

/// CSS custom properties for the strip container.
///
/// # Example
/// ```
/// use notestrip::{build_layout, render::sheet_style, NoteEvent, SequenceConfig};
///
/// let layout = build_layout(&[NoteEvent::new("A4", 4)], &SequenceConfig::new(0.75, 56.0))?;
/// assert_eq!(
///     sheet_style(&layout),
///     "--song-duration:3.00s;--song-width:224px;--beat-width:56px"
/// );
/// # Ok::<(), notestrip::LayoutError>(())
/// ```
pub fn sheet_style<A>(layout: &SequenceLayout<A>) -> String {
    format!(
        "--song-duration:{:.2}s;--song-width:{:.0}px;--beat-width:{:.0}px",
        layout.total_duration_seconds, layout.total_width_pixels, layout.pixels_per_beat
    )
}

/// Render one `song-note` element per descriptor, in order.
pub fn render_note_strip<A: NoteLabel>(layout: &SequenceLayout<A>, options: &RenderOptions) -> String {
    let pad = " ".repeat(options.indent);
    let mut html = String::new();

    for d in layout {
        html.push_str(&format!(
            "{}<div class=\"song-note\" style=\"--note-x:{:.0}px;--note-width:{:.0}px;--note-start:{:.2}s;--note-duration:{:.2}s\">\n",
            pad, d.x_offset_pixels, d.width_pixels, d.start_time_seconds, d.duration_seconds
        ));
        html.push_str(&format!(
            "{}  <span class=\"song-note-pitch\">{}</span>\n",
            pad,
            escape_html(&d.annotation.label())
        ));

        let meta = d.annotation.meta();
        if !meta.is_empty() {
            html.push_str(&format!("{}  <span class=\"song-note-meta\">\n", pad));
            for (class, text) in meta {
                html.push_str(&format!(
                    "{}    <span class=\"song-note-{}\">{}</span>\n",
                    pad,
                    class,
                    escape_html(&text)
                ));
            }
            html.push_str(&format!("{}  </span>\n", pad));
        }

        html.push_str(&format!("{}</div>\n", pad));
    }

    html
}

/// Render a complete `song-sheet` block: container, playhead, and notes.
pub fn render_sheet<A: NoteLabel>(title: Option<&str>, layout: &SequenceLayout<A>) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"song-sheet\"");
    if let Some(title) = title {
        html.push_str(&format!(" aria-label=\"{}\"", escape_html(title)));
    }
    html.push_str(&format!(" style=\"{}\">\n", sheet_style(layout)));
    html.push_str("  <div class=\"song-staff\" role=\"list\" aria-label=\"Notes\">\n");
    html.push_str("    <div class=\"song-playhead\" aria-hidden=\"true\"></div>\n");
    html.push_str(&render_note_strip(layout, &RenderOptions { indent: 4 }));
    html.push_str("  </div>\n");
    html.push_str("</div>\n");

    html
}

/// Pretty-printed JSON with camelCase keys.
pub fn to_json<A: Serialize>(layout: &SequenceLayout<A>) -> Result<String, LayoutError> {
    serde_json::to_string_pretty(layout).map_err(|e| LayoutError::Serialize(e.to_string()))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{build_layout, NoteEvent, SequenceConfig};
    use crate::song::Bow;

    fn violin_layout() -> SequenceLayout<ViolinNote> {
        let notes = vec![
            NoteEvent::new(ViolinNote::new("A4").finger(0).string("A").bow(Bow::Down), 1),
            NoteEvent::new(ViolinNote::new("E5").finger(0).string("E").bow(Bow::Up), 2),
        ];
        build_layout(&notes, &SequenceConfig::new(0.75, 56.0)).unwrap()
    }

    #[test]
    fn test_note_strip_markup() {
        let html = render_note_strip(&violin_layout(), &RenderOptions::default());
        let expected = concat!(
            "          <div class=\"song-note\" style=\"--note-x:0px;--note-width:56px;--note-start:0.00s;--note-duration:0.75s\">\n",
            "            <span class=\"song-note-pitch\">A4</span>\n",
            "            <span class=\"song-note-meta\">\n",
            "              <span class=\"song-note-finger\">Finger 0</span>\n",
            "              <span class=\"song-note-string\">A string</span>\n",
            "              <span class=\"song-note-bow\">⬇️ bow</span>\n",
            "            </span>\n",
            "          </div>\n",
            "          <div class=\"song-note\" style=\"--note-x:56px;--note-width:112px;--note-start:0.75s;--note-duration:1.50s\">\n",
            "            <span class=\"song-note-pitch\">E5</span>\n",
            "            <span class=\"song-note-meta\">\n",
            "              <span class=\"song-note-finger\">Finger 0</span>\n",
            "              <span class=\"song-note-string\">E string</span>\n",
            "              <span class=\"song-note-bow\">⬆️ bow</span>\n",
            "            </span>\n",
            "          </div>\n",
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_note_strip_omits_empty_meta() {
        let layout = build_layout(&[NoteEvent::new("C5", 4)], &SequenceConfig::new(0.5, 40.0)).unwrap();
        let html = render_note_strip(&layout, &RenderOptions { indent: 0 });

        assert_eq!(
            html,
            "<div class=\"song-note\" style=\"--note-x:0px;--note-width:160px;--note-start:0.00s;--note-duration:2.00s\">\n  <span class=\"song-note-pitch\">C5</span>\n</div>\n"
        );
    }

    #[test]
    fn test_note_strip_escapes_text() {
        let layout = build_layout(&[NoteEvent::new("<b>&", 1)], &SequenceConfig::default()).unwrap();
        let html = render_note_strip(&layout, &RenderOptions::default());

        assert!(html.contains("&lt;b&gt;&amp;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_empty_layout_renders_nothing() {
        let layout = build_layout::<&str>(&[], &SequenceConfig::default()).unwrap();
        assert_eq!(render_note_strip(&layout, &RenderOptions::default()), "");
        assert_eq!(sheet_style(&layout), "--song-duration:0.00s;--song-width:0px;--beat-width:56px");
    }

    #[test]
    fn test_sheet_wraps_strip() {
        let html = render_sheet(Some("Tom & Jerry"), &violin_layout());

        assert!(html.starts_with(
            "<div class=\"song-sheet\" aria-label=\"Tom &amp; Jerry\" style=\"--song-duration:2.25s;--song-width:168px;--beat-width:56px\">\n"
        ));
        assert!(html.contains("    <div class=\"song-playhead\" aria-hidden=\"true\"></div>\n"));
        assert!(html.contains("    <div class=\"song-note\" style=\"--note-x:56px;"));
        assert!(html.ends_with("  </div>\n</div>\n"));
    }

    #[test]
    fn test_untitled_sheet_has_no_label() {
        let html = render_sheet(None, &violin_layout());

        assert!(html.starts_with(
            "<div class=\"song-sheet\" style=\"--song-duration:2.25s;--song-width:168px;--beat-width:56px\">\n"
        ));
        assert_eq!(html.matches("aria-label=").count(), 1);
        assert!(html.contains("<div class=\"song-staff\" role=\"list\" aria-label=\"Notes\">"));
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&violin_layout()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["totalBeats"], 3);
        assert_eq!(value["descriptors"][1]["annotation"]["pitch"], "E5");
        assert_eq!(value["descriptors"][1]["annotation"]["bow"], "up");
        assert_eq!(value["descriptors"][1]["xOffsetPixels"], 56.0);
    }
}
