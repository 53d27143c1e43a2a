pub(crate) mod config;
pub(crate) mod plot_type;
pub(crate) mod point;
pub(crate) mod preset;
