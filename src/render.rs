//! Terminal output for highlighted spans.
//!
//! Commands are queued on any `Write` so tests can render into a buffer;
//! `reset` flushes.

use std::io::Write;

use anyhow::Result;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};

use crate::span::Span;
use crate::style::{Color, Theme};

fn term_color(color: Color) -> TermColor {
    let channel = |x: f32| (x.clamp(0.0, 1.0) * 255.0).round() as u8;
    TermColor::Rgb {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

/// Set the theme's background for subsequent prints.
pub fn set_background(w: &mut impl Write, theme: &Theme) -> Result<()> {
    queue!(w, SetBackgroundColor(term_color(theme.background)))?;
    Ok(())
}

/// Queue the styled text for a run of spans. Translucent foreground colors
/// are composited over the theme background.
pub fn print_spans(w: &mut impl Write, theme: &Theme, text: &str, spans: &[Span]) -> Result<()> {
    for span in spans {
        let style = theme.style(span.style);
        let color = theme.background.over(style.color);
        queue!(
            w,
            SetForegroundColor(term_color(color)),
            SetAttribute(if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            }),
            SetAttribute(if style.italic {
                Attribute::Italic
            } else {
                Attribute::NoItalic
            }),
            Print(&text[span.start..span.end])
        )?;
    }
    Ok(())
}

/// Drop back to the terminal's own colors and flush everything queued.
pub fn reset(w: &mut impl Write) -> Result<()> {
    queue!(w, SetAttribute(Attribute::Reset), ResetColor)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ONE_DARK, StyleTag};

    #[test]
    fn channel_rounding() {
        let c = term_color(Color::new(1.0, 0.5, 0.0, 1.0));
        assert_eq!(
            c,
            TermColor::Rgb {
                r: 255,
                g: 128,
                b: 0
            }
        );
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        let c = term_color(Color::new(1.5, -0.25, 0.0, 1.0));
        assert_eq!(c, TermColor::Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn renders_text_between_color_changes() {
        let text = "if x";
        let spans = vec![
            Span::new(0, 2, StyleTag::Keyword),
            Span::new(2, 4, StyleTag::Default),
        ];
        let mut out = Vec::new();
        print_spans(&mut out, &ONE_DARK, text, &spans).unwrap();
        reset(&mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("if"));
        assert!(rendered.contains(" x"));
        // truecolor foreground escapes
        assert!(rendered.contains("38;2;"));
    }
}
