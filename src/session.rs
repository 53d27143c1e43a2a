use crate::foundation::error::{PlotError, PlotResult};
use crate::foundation::math::Rng64;
use crate::ingest::csv::{CsvImport, import_csv};
use crate::model::config::{PlotConfig, PlotConfigPatch};
use crate::model::plot_type::PlotType;
use crate::model::point::{Axis, DataSet, EXAMPLE_PAIRS, PointId};
use crate::model::preset::JournalPreset;
use crate::render::frame::{FrameOutcome, FrameRenderer};
use crate::render::surface::RenderSurface;

/// Number of blank rows a fresh session starts with.
pub const INITIAL_EMPTY_ROWS: usize = 3;

/// An editing session: the current config snapshot plus the editable data set.
///
/// Every mutation swaps in a new validated [`PlotConfig`] or edits the [`DataSet`] in place;
/// [`PlotSession::render`] always redraws from scratch.
#[derive(Clone, Debug)]
pub struct PlotSession {
    config: PlotConfig,
    data: DataSet,
}

impl Default for PlotSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotSession {
    /// Default config and three blank rows.
    pub fn new() -> Self {
        Self::with_data(
            PlotConfig::default(),
            DataSet::with_empty_rows(INITIAL_EMPTY_ROWS),
        )
    }

    /// Session over an existing config and data set.
    pub fn with_data(config: PlotConfig, data: DataSet) -> Self {
        Self { config, data }
    }

    /// Current config snapshot.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Current data set.
    pub fn data(&self) -> &DataSet {
        &self.data
    }

    /// Apply a partial update. On error the current config is kept.
    pub fn update_config(&mut self, patch: &PlotConfigPatch) -> PlotResult<()> {
        self.config = self.config.apply(patch)?;
        Ok(())
    }

    /// Overwrite typography, line width and colors from `preset`.
    pub fn apply_preset(&mut self, preset: &JournalPreset) -> PlotResult<()> {
        self.config = preset.apply_to(&self.config)?;
        tracing::debug!(preset = %preset.id, "applied journal preset");
        Ok(())
    }

    /// Restore the default config. Data is untouched.
    pub fn reset_to_default(&mut self) {
        self.config = PlotConfig::default();
    }

    /// Replace the data with the built-in 8-point example.
    pub fn load_example_data(&mut self) {
        self.data.replace_with_pairs(EXAMPLE_PAIRS);
    }

    /// Switch plot type, keeping everything else.
    pub fn change_plot_type(&mut self, plot_type: PlotType) {
        self.config = self.config.with_plot_type(plot_type);
    }

    /// Replace the data with the complete rows of `text`.
    pub fn load_csv(&mut self, text: &str) -> CsvImport {
        let import = import_csv(text);
        self.data.replace_with_pairs(import.rows.iter().copied());
        tracing::debug!(
            rows = import.rows.len(),
            dropped = import.dropped,
            "loaded csv data"
        );
        import
    }

    /// Append a blank row.
    pub fn add_point(&mut self) -> PointId {
        self.data.push_empty()
    }

    /// Remove the row `id`. Returns `false` if it does not exist.
    pub fn remove_point(&mut self, id: PointId) -> bool {
        self.data.remove(id)
    }

    /// Set or clear one coordinate of row `id`. Returns `false` if it does not exist.
    pub fn update_point(&mut self, id: PointId, axis: Axis, value: Option<f64>) -> bool {
        self.data.update(id, axis, value)
    }

    /// Error unless at least two rows are complete, the minimum for a meaningful plot.
    pub fn check_ready(&self) -> PlotResult<()> {
        let valid = self.data.valid_points().len();
        if valid < 2 {
            return Err(PlotError::validation(format!(
                "at least two data points with valid values are required, found {valid}"
            )));
        }
        Ok(())
    }

    /// Redraw `surface` from the current state.
    pub fn render(&self, surface: &mut dyn RenderSurface, rng: &mut Rng64) -> FrameOutcome {
        FrameRenderer::render(surface, &self.config, self.data.as_slice(), rng)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
