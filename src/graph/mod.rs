//! Sample graph construction and rendering.
//!
//! - `builder`: star-shaped directed graph (main song -> each sample)
//! - `render`: two-level layout producing a [`Figure`]
//! - `svg`: standalone SVG export of a figure

mod builder;
mod render;
mod svg;

pub use builder::{NodeRole, SampleGraph, SampleNode, build_graph};
pub use render::{
    EdgeSegment, Figure, FigureBounds, MAIN_POSITION, NodeMarker, Position, SAMPLE_ROW_Y,
    Viewport, render, sample_x,
};
