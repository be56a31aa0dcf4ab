//! Style tags, colors, and themes.
//!
//! The engine only cares about [`StyleTag`] identity; everything visual
//! (colors, bold, italic) lives in a [`Theme`] and is consumed by the
//! renderer alone.

/// Classification assigned to a highlighted region.
///
/// `Inherit` is a pseudo-tag: a highlight wrapper carrying it leaves the
/// enclosing style in effect. All other tags name a concrete theme style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Inherit,
    Default,
    Comment,
    Keyword,
    Operator,
    Type,
    Literal,
    String,
    Escape,
    Function,
}

/// An RGBA color with premultipliable alpha, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Piecewise-linear approximation of one RGB channel of a pure hue.
    const fn hue_channel(h: f32) -> f32 {
        if h <= 60.0 {
            h / 60.0
        } else if h <= 180.0 {
            1.0
        } else if h <= 240.0 {
            4.0 - h / 60.0
        } else {
            0.0
        }
    }

    /// Fully saturated color for a hue in degrees (`0.0..360.0`).
    const fn hue(h: f32) -> Self {
        Self::new(
            Self::hue_channel(if h < 240.0 { h + 120.0 } else { h - 240.0 }),
            Self::hue_channel(h),
            Self::hue_channel(if h < 120.0 { h + 240.0 } else { h - 120.0 }),
            1.0,
        )
    }

    /// Composite `c` on top of `self` (standard source-over blending).
    pub const fn over(self, c: Color) -> Color {
        let a = self.a * (1.0 - c.a) + c.a;
        Color::new(
            (self.r * self.a * (1.0 - c.a) + c.r * c.a) / a,
            (self.g * self.a * (1.0 - c.a) + c.g * c.a) / a,
            (self.b * self.a * (1.0 - c.a) + c.b * c.a) / a,
            a,
        )
    }

    /// Color from hue (degrees), saturation and lightness (percent).
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        let desaturated = Self::hue(h).over(Color::new(0.5, 0.5, 0.5, 1.0 - s / 100.0));
        if l < 50.0 {
            desaturated.over(Color::new(0.0, 0.0, 0.0, 1.0 - l / 50.0))
        } else {
            desaturated.over(Color::new(1.0, 1.0, 1.0, l / 50.0 - 1.0))
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Color::new(self.r, self.g, self.b, self.a * a)
    }
}

/// Visual attributes for one style tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(color: Color) -> Self {
        Self {
            color,
            bold: true,
            italic: false,
        }
    }

    pub const fn italic(color: Color) -> Self {
        Self {
            color,
            bold: false,
            italic: true,
        }
    }
}

/// A named mapping from style tags to visual attributes.
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    styles: [Style; 9],
}

impl Theme {
    pub const fn new(name: &'static str, background: Color, styles: [Style; 9]) -> Self {
        Self {
            name,
            background,
            styles,
        }
    }

    /// Resolve a tag to its visual style. `Inherit` never reaches the
    /// renderer, but resolves to the text style if it does.
    pub fn style(&self, tag: StyleTag) -> &Style {
        let index = match tag {
            StyleTag::Inherit | StyleTag::Default => 0,
            StyleTag::Comment => 1,
            StyleTag::Keyword => 2,
            StyleTag::Operator => 3,
            StyleTag::Type => 4,
            StyleTag::Literal => 5,
            StyleTag::String => 6,
            StyleTag::Escape => 7,
            StyleTag::Function => 8,
        };
        &self.styles[index]
    }
}

pub static ONE_DARK: Theme = Theme::new(
    "one-dark",
    Color::hsl(220.0, 13.0, 18.0), // background
    [
        Style::new(Color::hsl(220.0, 14.0, 71.0)),    // text
        Style::italic(Color::hsl(220.0, 10.0, 40.0)), // comments
        Style::new(Color::hsl(286.0, 60.0, 67.0)),    // keywords
        Style::new(Color::hsl(286.0, 60.0, 67.0)),    // operators
        Style::new(Color::hsl(187.0, 47.0, 55.0)),    // types
        Style::new(Color::hsl(29.0, 54.0, 61.0)),     // literals
        Style::new(Color::hsl(95.0, 38.0, 62.0)),     // strings
        Style::new(Color::hsl(187.0, 47.0, 55.0)),    // escape sequences
        Style::new(Color::hsl(207.0, 82.0, 66.0)),    // function names
    ],
);

pub static MONOKAI: Theme = Theme::new(
    "monokai",
    Color::hsl(70.0, 8.0, 15.0), // background
    [
        Style::new(Color::hsl(60.0, 30.0, 96.0)),      // text
        Style::new(Color::hsl(50.0, 11.0, 41.0)),      // comments
        Style::new(Color::hsl(338.0, 95.0, 56.0)),     // keywords
        Style::new(Color::hsl(338.0, 95.0, 56.0)),     // operators
        Style::italic(Color::hsl(190.0, 81.0, 67.0)),  // types
        Style::new(Color::hsl(261.0, 100.0, 75.0)),    // literals
        Style::new(Color::hsl(54.0, 70.0, 68.0)),      // strings
        Style::new(Color::hsl(261.0, 100.0, 75.0)),    // escape sequences
        Style::new(Color::hsl(80.0, 76.0, 53.0)),      // function names
    ],
);

/// Look up a built-in theme by name.
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    [&ONE_DARK, &MONOKAI].into_iter().find(|t| t.name == name)
}
