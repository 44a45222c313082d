pub(crate) mod rasterizer;
pub(crate) mod surface;
pub(crate) mod text;
