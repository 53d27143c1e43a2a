use std::collections::HashMap;
use std::sync::OnceLock;

use usvg::fontdb;

use crate::foundation::color::Rgba8;
use crate::model::config::FontFamily;

/// Brush carried through Parley layouts: straight-alpha text color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// A shaped single-line layout plus the face it was shaped with.
pub(crate) struct ShapedText {
    pub layout: parley::Layout<TextBrushRgba8>,
    pub font: vello_cpu::peniko::FontData,
}

impl ShapedText {
    pub fn width(&self) -> f64 {
        f64::from(self.layout.width())
    }

    pub fn height(&self) -> f64 {
        f64::from(self.layout.height())
    }

    /// Distance from the top of the layout box to the first baseline.
    pub fn baseline(&self) -> f64 {
        self.layout
            .lines()
            .next()
            .map(|line| f64::from(line.metrics().baseline))
            .unwrap_or_else(|| self.height())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct FaceKey {
    family: FontFamily,
    bold: bool,
}

struct ResolvedFace {
    font_ctx: parley::FontContext,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

/// Shapes plot text with Parley against faces resolved from the system font database.
///
/// Each `(family, bold)` pair resolves once: the named family if installed, otherwise the
/// generic serif/sans/monospace fallback, otherwise any face at all. When the machine has no
/// fonts, [`TextLayoutEngine::shape`] returns `None` and text is skipped.
pub(crate) struct TextLayoutEngine {
    faces: HashMap<FaceKey, Option<ResolvedFace>>,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            faces: HashMap::new(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    pub fn shape(
        &mut self,
        text: &str,
        family: FontFamily,
        bold: bool,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> Option<ShapedText> {
        if text.is_empty() || !size_px.is_finite() || size_px <= 0.0 {
            return None;
        }

        let face = self
            .faces
            .entry(FaceKey { family, bold })
            .or_insert_with(|| load_face(system_fonts(), family, bold))
            .as_mut()?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut face.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(face.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        Some(ShapedText {
            layout,
            font: face.font.clone(),
        })
    }
}

fn system_fonts() -> &'static fontdb::Database {
    static DB: OnceLock<fontdb::Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        db
    })
}

fn generic_family(family: FontFamily) -> fontdb::Family<'static> {
    if family.is_serif() {
        fontdb::Family::Serif
    } else if family.is_monospace() {
        fontdb::Family::Monospace
    } else {
        fontdb::Family::SansSerif
    }
}

fn load_face(db: &fontdb::Database, family: FontFamily, bold: bool) -> Option<ResolvedFace> {
    let families = [fontdb::Family::Name(family.name()), generic_family(family)];
    let query = fontdb::Query {
        families: &families,
        weight: if bold {
            fontdb::Weight::BOLD
        } else {
            fontdb::Weight::NORMAL
        },
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let Some(id) = db
        .query(&query)
        .or_else(|| db.faces().next().map(|face| face.id))
    else {
        tracing::debug!(family = family.name(), bold, "no font face available");
        return None;
    };
    let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;

    let mut font_ctx = parley::FontContext::default();
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
    let family_id = families.first().map(|(id, _)| *id)?;
    let family_name = font_ctx.collection.family_name(family_id)?.to_string();

    tracing::debug!(
        requested = family.name(),
        resolved = %family_name,
        bold,
        "resolved font face"
    );

    Some(ResolvedFace {
        font_ctx,
        family_name,
        font: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), index),
    })
}
