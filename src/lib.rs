//! Plotcraft renders scientific plots from `(x, y)` data onto a raster surface.
//!
//! A render is a pure function of a [`PlotConfig`] snapshot, a point sequence and a random
//! source:
//!
//! - Build or edit data in a [`DataSet`] (or a [`PlotSession`], which also owns the config)
//! - Pick one of the 31 [`PlotType`]s, optionally applying a [`JournalPreset`]
//! - Draw with [`FrameRenderer::render`] into any [`RenderSurface`]: [`CpuSurface`] for pixels,
//!   [`RecordingSurface`] for headless inspection
//! - Encode the frame with [`encode_png`]
//!
//! Rendering never fails. Empty data draws a placeholder message, and plots that cannot draw
//! their input draw a fallback label. Errors only come from config validation, surface
//! construction, CSV file IO and PNG encoding.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod ingest;
pub(crate) mod model;
pub(crate) mod plots;
pub(crate) mod render;
/// Editing session over a config and a data set.
pub mod session;

pub use crate::foundation::color::Rgba8;
pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{PlotError, PlotResult};
pub use crate::foundation::math::Rng64;

pub use crate::ingest::csv::{
    ColumnChoice, CsvImport, choose_columns, import_csv, import_csv_file, parse_float_prefix,
};
pub use crate::model::config::{FontFamily, Palette, PlotConfig, PlotConfigPatch, limits};
pub use crate::model::plot_type::{PlotCategory, PlotType};
pub use crate::model::point::{Axis, DataPoint, DataSet, EXAMPLE_PAIRS, PointId, ValidPoint};
pub use crate::model::preset::{JournalPreset, PALETTES, PaletteDef, palette_by_id};
pub use crate::plots::{DrawOutcome, PlotContext, PlotRenderer, TriangleStyle};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::export::{encode_png, export_file_name};
pub use crate::render::frame::{EMPTY_PLACEHOLDER, FrameOutcome, FrameRenderer, fallback_label};
pub use crate::render::record::{DrawCmd, RecordingSurface};
pub use crate::render::scale::{
    AXIS_PADDING, DataBounds, FRAME_MARGIN, LinearScale, PlotArea, ScaleMapper,
};
pub use crate::render::surface::{
    FrameRGBA, Paint, RenderSurface, Stroke, TextAlign, TextBaseline, TextStyle,
};
pub use crate::session::PlotSession;
