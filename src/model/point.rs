use serde::{Deserialize, Serialize};

/// Session-unique, stable identifier of a data point.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PointId(pub u64);

/// Which coordinate of a point an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The x coordinate.
    X,
    /// The y coordinate.
    Y,
}

/// One editable `(x, y)` row. Either coordinate may be absent while the user is typing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Stable identifier.
    pub id: PointId,
    /// X coordinate, if entered.
    pub x: Option<f64>,
    /// Y coordinate, if entered.
    pub y: Option<f64>,
}

impl DataPoint {
    /// Both coordinates, when the point is complete.
    pub fn valid(&self) -> Option<ValidPoint> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(ValidPoint { x, y }),
            _ => None,
        }
    }

    /// `true` when either coordinate is absent.
    pub fn is_incomplete(&self) -> bool {
        self.valid().is_none()
    }
}

/// A complete point, the only kind renderers see.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidPoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite())
}

/// Ordered, editable point list.
///
/// Incomplete points are kept so the editor can show them, and skipped by
/// [`DataSet::valid_points`]. Non-finite numbers are stored as absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    points: Vec<DataPoint>,
    next_id: u64,
}

impl DataSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set holding `n` empty rows, the editor's starting state.
    pub fn with_empty_rows(n: usize) -> Self {
        let mut out = Self::new();
        for _ in 0..n {
            out.push_empty();
        }
        out
    }

    /// Set built from complete `(x, y)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut out = Self::new();
        for (x, y) in pairs {
            out.push(Some(x), Some(y));
        }
        out
    }

    fn alloc_id(&mut self) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a point and return its id.
    pub fn push(&mut self, x: Option<f64>, y: Option<f64>) -> PointId {
        let id = self.alloc_id();
        self.points.push(DataPoint {
            id,
            x: finite(x),
            y: finite(y),
        });
        id
    }

    /// Append an empty row and return its id.
    pub fn push_empty(&mut self) -> PointId {
        self.push(None, None)
    }

    /// Remove the point with `id`. Returns `false` if no such point exists.
    pub fn remove(&mut self, id: PointId) -> bool {
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        self.points.len() != before
    }

    /// Set one coordinate of the point with `id`. Returns `false` if no such point exists.
    pub fn update(&mut self, id: PointId, axis: Axis, value: Option<f64>) -> bool {
        let Some(p) = self.points.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        match axis {
            Axis::X => p.x = finite(value),
            Axis::Y => p.y = finite(value),
        }
        true
    }

    /// Drop every point and append `pairs` with fresh ids.
    pub fn replace_with_pairs(&mut self, pairs: impl IntoIterator<Item = (f64, f64)>) {
        self.points.clear();
        for (x, y) in pairs {
            self.push(Some(x), Some(y));
        }
    }

    /// Point with `id`, if present.
    pub fn get(&self, id: PointId) -> Option<&DataPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Complete points in list order.
    pub fn valid_points(&self) -> Vec<ValidPoint> {
        self.points.iter().filter_map(DataPoint::valid).collect()
    }

    /// All rows in list order.
    pub fn iter(&self) -> impl Iterator<Item = &DataPoint> {
        self.points.iter()
    }

    /// All rows as a slice.
    pub fn as_slice(&self) -> &[DataPoint] {
        &self.points
    }

    /// Number of rows, complete or not.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The eight-point example set offered by the editor.
pub const EXAMPLE_PAIRS: [(f64, f64); 8] = [
    (1.0, 4.0),
    (2.0, 7.0),
    (3.0, 2.0),
    (4.0, 9.0),
    (5.0, 5.0),
    (6.0, 8.0),
    (7.0, 6.0),
    (8.0, 3.0),
];

#[cfg(test)]
#[path = "../../tests/unit/model/point.rs"]
mod tests;
