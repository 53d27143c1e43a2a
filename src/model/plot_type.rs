use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::PlotError;

/// Group a plot type belongs to in the catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlotCategory {
    /// Classic 2D charts driven by the data set.
    Basic,
    /// Regular-grid types.
    GriddedData,
    /// Scattered-point triangulation types.
    IrregularGrid,
    /// Projected 3D and volume types.
    Volumetric,
}

impl PlotCategory {
    /// All categories in catalogue order.
    pub const ALL: [PlotCategory; 4] = [
        PlotCategory::Basic,
        PlotCategory::GriddedData,
        PlotCategory::IrregularGrid,
        PlotCategory::Volumetric,
    ];

    /// Human-readable heading.
    pub fn label(self) -> &'static str {
        match self {
            PlotCategory::Basic => "Basic",
            PlotCategory::GriddedData => "Gridded Data",
            PlotCategory::IrregularGrid => "Irregular Grid",
            PlotCategory::Volumetric => "3D & Volumetric",
        }
    }
}

macro_rules! plot_types {
    ($( $variant:ident => $name:literal, $label:literal, $category:ident; )*) => {
        /// Closed set of supported plot types.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum PlotType {
            $(
                #[doc = $label]
                $variant,
            )*
        }

        impl PlotType {
            /// Every plot type in catalogue order.
            pub const ALL: &'static [PlotType] = &[$(PlotType::$variant),*];

            /// Canonical name used in config files and on the command line.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(PlotType::$variant => $name,)*
                }
            }

            /// Display label shown in the catalogue.
            pub fn label(self) -> &'static str {
                match self {
                    $(PlotType::$variant => $label,)*
                }
            }

            /// Catalogue group.
            pub fn category(self) -> PlotCategory {
                match self {
                    $(PlotType::$variant => PlotCategory::$category,)*
                }
            }
        }

        impl FromStr for PlotType {
            type Err = PlotError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($name => Ok(PlotType::$variant),)*
                    other => Err(PlotError::validation(format!("unknown plot type \"{other}\""))),
                }
            }
        }
    };
}

plot_types! {
    Line => "line", "Line Graph", Basic;
    Scatter => "scatter", "Scatter Plot", Basic;
    Bar => "bar", "Bar Chart", Basic;
    Histogram => "histogram", "Histogram", Basic;
    Boxplot => "boxplot", "Box Plot", Basic;
    Heatmap => "heatmap", "Heat Map", Basic;
    Pie => "pie", "Pie Chart", Basic;
    Radar => "radar", "Radar Plot", Basic;
    Area => "area", "Area Chart", Basic;
    Bubble => "bubble", "Bubble Chart", Basic;

    Imshow => "imshow", "imshow(Z)", GriddedData;
    Pcolormesh => "pcolormesh", "pcolormesh(X, Y, Z)", GriddedData;
    Contour => "contour", "contour(X, Y, Z)", GriddedData;
    Contourf => "contourf", "contourf(X, Y, Z)", GriddedData;
    Barbs => "barbs", "barbs(X, Y, U, V)", GriddedData;
    Quiver => "quiver", "quiver(X, Y, U, V)", GriddedData;
    Streamplot => "streamplot", "streamplot(X, Y, U, V)", GriddedData;

    Tricontour => "tricontour", "tricontour(x, y, z)", IrregularGrid;
    Tricontourf => "tricontourf", "tricontourf(x, y, z)", IrregularGrid;
    Tripcolor => "tripcolor", "tripcolor(x, y, z)", IrregularGrid;
    Triplot => "triplot", "triplot(x, y)", IrregularGrid;

    Bar3d => "bar3d", "bar3d(x, y, z, dx, dy, dz)", Volumetric;
    FillBetween => "fill_between", "fill_between(x1, y1, z1, x2, y2, z2)", Volumetric;
    Plot3d => "plot3d", "plot(xs, ys, zs)", Volumetric;
    Quiver3d => "quiver3d", "quiver(X, Y, Z, U, V, W)", Volumetric;
    Scatter3d => "scatter3d", "scatter(xs, ys, zs)", Volumetric;
    Stem3d => "stem3d", "stem(x, y, z)", Volumetric;
    PlotSurface => "plot_surface", "plot_surface(X, Y, Z)", Volumetric;
    PlotTrisurf => "plot_trisurf", "plot_trisurf(x, y, z)", Volumetric;
    Voxels => "voxels", "voxels([x, y, z], filled)", Volumetric;
    PlotWireframe => "plot_wireframe", "plot_wireframe(X, Y, Z)", Volumetric;
}

impl PlotType {
    /// Plot types of one category, in catalogue order.
    pub fn in_category(category: PlotCategory) -> impl Iterator<Item = PlotType> {
        Self::ALL
            .iter()
            .copied()
            .filter(move |t| t.category() == category)
    }
}

impl Default for PlotType {
    fn default() -> Self {
        PlotType::Line
    }
}

impl fmt::Display for PlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PlotType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlotType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/plot_type.rs"]
mod tests;
