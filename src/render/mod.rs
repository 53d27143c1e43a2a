pub(crate) mod cpu;
pub(crate) mod export;
pub(crate) mod frame;
pub(crate) mod record;
pub(crate) mod scale;
pub(crate) mod surface;
pub(crate) mod text;
