use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgba8;
use crate::foundation::error::PlotResult;
use crate::model::config::{FontFamily, Palette, PlotConfig, PlotConfigPatch};

/// A named, static color sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteDef {
    /// Lookup key.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Colors, primary first.
    pub colors: &'static [Rgba8],
}

impl PaletteDef {
    /// Owned palette value. An empty definition falls back to black.
    pub fn palette(&self) -> Palette {
        Palette::new(self.colors.to_vec()).unwrap_or_else(|_| Palette::single(Rgba8::BLACK))
    }
}

pub(crate) const SCIENTIFIC: PaletteDef = PaletteDef {
    id: "scientific",
    name: "Scientific",
    colors: &[
        Rgba8::rgb(0x43, 0x38, 0xca),
        Rgba8::rgb(0x38, 0xb2, 0xac),
        Rgba8::rgb(0xf5, 0x65, 0x65),
        Rgba8::rgb(0x9f, 0x7a, 0xea),
        Rgba8::rgb(0x38, 0xa1, 0x69),
    ],
};

/// Built-in palettes offered next to the journal presets.
pub const PALETTES: &[PaletteDef] = &[
    SCIENTIFIC,
    PaletteDef {
        id: "pastel",
        name: "Pastel",
        colors: &[
            Rgba8::rgb(0xf2, 0xfc, 0xe2),
            Rgba8::rgb(0xfe, 0xf7, 0xcd),
            Rgba8::rgb(0xfe, 0xc6, 0xa1),
            Rgba8::rgb(0xe5, 0xde, 0xff),
            Rgba8::rgb(0xff, 0xde, 0xe2),
        ],
    },
    PaletteDef {
        id: "vibrant",
        name: "Vibrant",
        colors: &[
            Rgba8::rgb(0x8b, 0x5c, 0xf6),
            Rgba8::rgb(0xd9, 0x46, 0xef),
            Rgba8::rgb(0xf9, 0x73, 0x16),
            Rgba8::rgb(0x0e, 0xa5, 0xe9),
            Rgba8::rgb(0x22, 0xc5, 0x5e),
        ],
    },
    PaletteDef {
        id: "monochrome",
        name: "Monochrome",
        colors: &[
            Rgba8::rgb(0x33, 0x33, 0x33),
            Rgba8::rgb(0x55, 0x55, 0x55),
            Rgba8::rgb(0x77, 0x77, 0x77),
            Rgba8::rgb(0x99, 0x99, 0x99),
            Rgba8::rgb(0xbb, 0xbb, 0xbb),
        ],
    },
    PaletteDef {
        id: "gradient",
        name: "Gradient",
        colors: &[
            Rgba8::rgb(0x1a, 0x36, 0x5d),
            Rgba8::rgb(0x2a, 0x4a, 0x73),
            Rgba8::rgb(0x3c, 0x5d, 0x8f),
            Rgba8::rgb(0x75, 0x96, 0xc5),
            Rgba8::rgb(0x9f, 0xb4, 0xd9),
        ],
    },
];

/// Look up a built-in palette by id.
pub fn palette_by_id(id: &str) -> Option<&'static PaletteDef> {
    PALETTES.iter().find(|p| p.id.eq_ignore_ascii_case(id.trim()))
}

/// Typography and color bundle mimicking a publication's style guide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalPreset {
    /// Lookup key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Font family.
    pub font_family: FontFamily,
    /// Body font size in px.
    pub font_size: f64,
    /// Title font size in px.
    pub title_size: f64,
    /// Axis label font size in px.
    pub label_size: f64,
    /// Stroke width in px.
    pub line_width: f64,
    /// Series colors.
    pub colors: Palette,
    /// Background fill.
    pub background_color: Rgba8,
}

impl JournalPreset {
    /// Return `config` with this preset's typography, colors and background.
    ///
    /// Title, labels, plot type and display toggles are left as they are.
    pub fn apply_to(&self, config: &PlotConfig) -> PlotResult<PlotConfig> {
        config.apply(&PlotConfigPatch {
            font_family: Some(self.font_family),
            font_size: Some(self.font_size),
            title_size: Some(self.title_size),
            label_size: Some(self.label_size),
            line_width: Some(self.line_width),
            colors: Some(self.colors.clone()),
            background_color: Some(self.background_color),
            ..PlotConfigPatch::default()
        })
    }

    /// Built-in presets: default, nature, science and ieee.
    pub fn builtin() -> Vec<JournalPreset> {
        fn preset(
            id: &str,
            name: &str,
            font_family: FontFamily,
            (font_size, title_size, label_size): (f64, f64, f64),
            line_width: f64,
            colors: &[Rgba8],
        ) -> JournalPreset {
            JournalPreset {
                id: id.to_owned(),
                name: name.to_owned(),
                font_family,
                font_size,
                title_size,
                label_size,
                line_width,
                colors: Palette::new(colors.to_vec())
                    .unwrap_or_else(|_| Palette::single(Rgba8::BLACK)),
                background_color: Rgba8::WHITE,
            }
        }

        vec![
            preset(
                "default",
                "Default",
                FontFamily::Arial,
                (12.0, 16.0, 14.0),
                2.0,
                SCIENTIFIC.colors,
            ),
            preset(
                "nature",
                "Nature",
                FontFamily::Arial,
                (8.0, 12.0, 10.0),
                1.0,
                &[
                    Rgba8::rgb(0x00, 0x00, 0x00),
                    Rgba8::rgb(0xe6, 0x4b, 0x35),
                    Rgba8::rgb(0x4d, 0xbb, 0xd5),
                    Rgba8::rgb(0x00, 0xa0, 0x87),
                    Rgba8::rgb(0x3c, 0x54, 0x88),
                ],
            ),
            preset(
                "science",
                "Science",
                FontFamily::Arial,
                (9.0, 14.0, 12.0),
                1.5,
                &[
                    Rgba8::rgb(0x3b, 0x49, 0x92),
                    Rgba8::rgb(0xee, 0x00, 0x00),
                    Rgba8::rgb(0x00, 0x8b, 0x45),
                    Rgba8::rgb(0x63, 0x18, 0x79),
                    Rgba8::rgb(0x00, 0x82, 0x80),
                ],
            ),
            preset(
                "ieee",
                "IEEE",
                FontFamily::TimesNewRoman,
                (8.0, 11.0, 9.0),
                1.0,
                &[
                    Rgba8::rgb(0x00, 0x72, 0xb2),
                    Rgba8::rgb(0xe6, 0x9f, 0x00),
                    Rgba8::rgb(0x56, 0xb4, 0xe9),
                    Rgba8::rgb(0x00, 0x9e, 0x73),
                    Rgba8::rgb(0xf0, 0xe4, 0x42),
                ],
            ),
        ]
    }

    /// Look up a built-in preset by id.
    pub fn by_id(id: &str) -> Option<JournalPreset> {
        let id = id.trim();
        Self::builtin()
            .into_iter()
            .find(|p| p.id.eq_ignore_ascii_case(id))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/preset.rs"]
mod tests;
