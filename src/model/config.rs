use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgba8;
use crate::foundation::error::{PlotError, PlotResult};
use crate::model::plot_type::PlotType;

/// Allow-listed font families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Arial.
    #[default]
    Arial,
    /// Times New Roman.
    TimesNewRoman,
    /// Helvetica.
    Helvetica,
    /// Courier New.
    CourierNew,
    /// Georgia.
    Georgia,
    /// Palatino.
    Palatino,
    /// Garamond.
    Garamond,
    /// Comic Sans MS.
    ComicSansMs,
    /// Trebuchet MS.
    TrebuchetMs,
    /// Verdana.
    Verdana,
    /// Impact.
    Impact,
}

impl FontFamily {
    /// Every allowed family.
    pub const ALL: [FontFamily; 11] = [
        FontFamily::Arial,
        FontFamily::TimesNewRoman,
        FontFamily::Helvetica,
        FontFamily::CourierNew,
        FontFamily::Georgia,
        FontFamily::Palatino,
        FontFamily::Garamond,
        FontFamily::ComicSansMs,
        FontFamily::TrebuchetMs,
        FontFamily::Verdana,
        FontFamily::Impact,
    ];

    /// Family name as used by font databases.
    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Georgia => "Georgia",
            FontFamily::Palatino => "Palatino",
            FontFamily::Garamond => "Garamond",
            FontFamily::ComicSansMs => "Comic Sans MS",
            FontFamily::TrebuchetMs => "Trebuchet MS",
            FontFamily::Verdana => "Verdana",
            FontFamily::Impact => "Impact",
        }
    }

    /// Whether the family is a serif face, used to pick a fallback.
    pub fn is_serif(self) -> bool {
        matches!(
            self,
            FontFamily::TimesNewRoman
                | FontFamily::Georgia
                | FontFamily::Palatino
                | FontFamily::Garamond
        )
    }

    /// Whether the family is fixed-pitch.
    pub fn is_monospace(self) -> bool {
        matches!(self, FontFamily::CourierNew)
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlotError::validation(format!("font family \"{s}\" is not allowed")))
    }
}

impl Serialize for FontFamily {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Non-empty, order-significant color sequence.
///
/// Index 0 is the primary series color. Lookups past the end wrap around.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette(Vec<Rgba8>);

impl Palette {
    /// Build a palette, rejecting an empty sequence.
    pub fn new(colors: Vec<Rgba8>) -> PlotResult<Self> {
        if colors.is_empty() {
            return Err(PlotError::validation("palette must contain at least one color"));
        }
        Ok(Self(colors))
    }

    /// One-color palette.
    pub fn single(color: Rgba8) -> Self {
        Self(vec![color])
    }

    /// Parse a palette from hex strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> PlotResult<Self> {
        let parsed = colors
            .iter()
            .map(|c| Rgba8::parse_hex(c.as_ref()))
            .collect::<PlotResult<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// Primary series color.
    pub fn primary(&self) -> Rgba8 {
        self.0[0]
    }

    /// Color at `index`, cycling through the palette.
    pub fn cyclic(&self, index: usize) -> Rgba8 {
        self.0[index % self.0.len()]
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Colors as a slice.
    pub fn as_slice(&self) -> &[Rgba8] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let colors = Vec::<Rgba8>::deserialize(deserializer)?;
        Palette::new(colors).map_err(serde::de::Error::custom)
    }
}

/// Accepted ranges for the numeric style fields. Values outside are clamped.
pub mod limits {
    /// Body font size range in px.
    pub const FONT_SIZE: (f64, f64) = (6.0, 20.0);
    /// Axis label font size range in px.
    pub const LABEL_SIZE: (f64, f64) = (6.0, 32.0);
    /// Title font size range in px.
    pub const TITLE_SIZE: (f64, f64) = (8.0, 32.0);
    /// Stroke width range in px.
    pub const LINE_WIDTH: (f64, f64) = (0.5, 5.0);
}

fn checked_size(field: &str, v: f64, (lo, hi): (f64, f64)) -> PlotResult<f64> {
    if !v.is_finite() || v <= 0.0 {
        return Err(PlotError::validation(format!(
            "{field} must be finite and > 0 (got {v})"
        )));
    }
    Ok(v.clamp(lo, hi))
}

/// Immutable per-render plot configuration.
///
/// Construct through [`PlotConfig::default`], deserialization, or [`PlotConfig::apply`]; all
/// three paths run the same validation, so a live value is always in range.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotConfig {
    pub(crate) title: String,
    pub(crate) x_label: String,
    pub(crate) y_label: String,
    pub(crate) plot_type: PlotType,
    pub(crate) font_family: FontFamily,
    pub(crate) font_size: f64,
    pub(crate) title_size: f64,
    pub(crate) label_size: f64,
    pub(crate) line_width: f64,
    pub(crate) colors: Palette,
    pub(crate) background_color: Rgba8,
    pub(crate) show_legend: bool,
    pub(crate) show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "My Scientific Plot".to_owned(),
            x_label: "X Axis".to_owned(),
            y_label: "Y Axis".to_owned(),
            plot_type: PlotType::Line,
            font_family: FontFamily::Arial,
            font_size: 12.0,
            title_size: 16.0,
            label_size: 14.0,
            line_width: 2.0,
            colors: crate::model::preset::SCIENTIFIC.palette(),
            background_color: Rgba8::WHITE,
            show_legend: true,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Plot title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// X axis label.
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Y axis label.
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Selected plot type.
    pub fn plot_type(&self) -> PlotType {
        self.plot_type
    }

    /// Font family for all text.
    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    /// Body font size in px.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Title font size in px.
    pub fn title_size(&self) -> f64 {
        self.title_size
    }

    /// Axis label font size in px.
    pub fn label_size(&self) -> f64 {
        self.label_size
    }

    /// Series stroke width in px.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Series colors.
    pub fn colors(&self) -> &Palette {
        &self.colors
    }

    /// Background fill.
    pub fn background_color(&self) -> Rgba8 {
        self.background_color
    }

    /// Whether the legend box is drawn.
    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    /// Whether the grid overlay is drawn.
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Produce a new snapshot with `patch` applied.
    ///
    /// Invalid values reject the whole patch; numeric values outside their range are clamped.
    pub fn apply(&self, patch: &PlotConfigPatch) -> PlotResult<PlotConfig> {
        let mut next = self.clone();
        if let Some(v) = &patch.title {
            next.title = v.clone();
        }
        if let Some(v) = &patch.x_label {
            next.x_label = v.clone();
        }
        if let Some(v) = &patch.y_label {
            next.y_label = v.clone();
        }
        if let Some(v) = patch.plot_type {
            next.plot_type = v;
        }
        if let Some(v) = patch.font_family {
            next.font_family = v;
        }
        if let Some(v) = patch.font_size {
            next.font_size = checked_size("font_size", v, limits::FONT_SIZE)?;
        }
        if let Some(v) = patch.title_size {
            next.title_size = checked_size("title_size", v, limits::TITLE_SIZE)?;
        }
        if let Some(v) = patch.label_size {
            next.label_size = checked_size("label_size", v, limits::LABEL_SIZE)?;
        }
        if let Some(v) = patch.line_width {
            next.line_width = checked_size("line_width", v, limits::LINE_WIDTH)?;
        }
        if let Some(v) = &patch.colors {
            next.colors = v.clone();
        }
        if let Some(v) = patch.background_color {
            next.background_color = v;
        }
        if let Some(v) = patch.show_legend {
            next.show_legend = v;
        }
        if let Some(v) = patch.show_grid {
            next.show_grid = v;
        }
        Ok(next)
    }

    /// Copy with a different plot type.
    pub fn with_plot_type(&self, plot_type: PlotType) -> PlotConfig {
        PlotConfig {
            plot_type,
            ..self.clone()
        }
    }

    /// Load a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> PlotResult<PlotConfig> {
        let patch: PlotConfigPatch = serde_json::from_str(json)
            .map_err(|e| PlotError::validation(format!("invalid plot config JSON: {e}")))?;
        PlotConfig::default().apply(&patch)
    }
}

impl<'de> Deserialize<'de> for PlotConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let patch = PlotConfigPatch::deserialize(deserializer)?;
        PlotConfig::default()
            .apply(&patch)
            .map_err(serde::de::Error::custom)
    }
}

/// Field-by-field update for a [`PlotConfig`]. `None` leaves the field unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfigPatch {
    /// New title.
    pub title: Option<String>,
    /// New x axis label.
    pub x_label: Option<String>,
    /// New y axis label.
    pub y_label: Option<String>,
    /// New plot type.
    pub plot_type: Option<PlotType>,
    /// New font family.
    pub font_family: Option<FontFamily>,
    /// New body font size.
    pub font_size: Option<f64>,
    /// New title font size.
    pub title_size: Option<f64>,
    /// New axis label font size.
    pub label_size: Option<f64>,
    /// New stroke width.
    pub line_width: Option<f64>,
    /// New palette.
    pub colors: Option<Palette>,
    /// New background color.
    pub background_color: Option<Rgba8>,
    /// Toggle the legend.
    pub show_legend: Option<bool>,
    /// Toggle the grid.
    pub show_grid: Option<bool>,
}

#[cfg(test)]
#[path = "../../tests/unit/model/config.rs"]
mod tests;
