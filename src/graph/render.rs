//! Two-level layout of the sample graph and the resulting figure.
//!
//! Figure space: the main song sits at (0, 1); samples are spread along
//! y = 0 with unit spacing, centered on x = 0. Drawing surfaces map figure
//! space to pixels through a [`Viewport`].

use std::collections::HashMap;

use super::builder::{NodeRole, SampleGraph};

/// Main song position in figure space
pub const MAIN_POSITION: Position = Position { x: 0.0, y: 1.0 };

/// Height of the sample row in figure space
pub const SAMPLE_ROW_Y: f32 = 0.0;

/// Horizontal distance between neighbouring samples
pub const SAMPLE_SPACING: f32 = 1.0;

/// Padding added around node extents so markers and labels fit
const PAD_X: f32 = 0.5;
const PAD_Y: f32 = 0.25;

/// A point in figure space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Line segment for one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSegment {
    pub from: Position,
    pub to: Position,
}

/// Marker, label and hover text for one node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMarker {
    pub position: Position,
    pub label: String,
    pub hover: String,
    pub role: NodeRole,
}

/// Everything needed to draw a sample graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    pub edges: Vec<EdgeSegment>,
    pub nodes: Vec<NodeMarker>,
}

/// Axis-aligned extents of a figure (already padded)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

/// Pixel rectangle a figure is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl NodeRole {
    /// Marker fill color as RGB in 0.0..=1.0
    pub fn color(self) -> [f32; 3] {
        match self {
            NodeRole::Main => [0.96, 0.56, 0.18],
            NodeRole::Sample => [0.53, 0.75, 0.92],
        }
    }

    /// Marker fill color as `#rrggbb`
    pub fn hex(self) -> String {
        let [r, g, b] = self.color();
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
    }
}

/// X coordinate of sample `index` out of `count`
pub fn sample_x(index: usize, count: usize) -> f32 {
    (index as f32 - (count as f32 - 1.0) / 2.0) * SAMPLE_SPACING
}

/// Lay out the graph and produce a drawable figure.
pub fn render(graph: &SampleGraph) -> Figure {
    let samples: Vec<_> = graph.sample_nodes().collect();
    let count = samples.len();

    let mut nodes = Vec::with_capacity(count + 1);
    let mut edges = Vec::with_capacity(count);

    let main = graph.main_song();
    nodes.push(NodeMarker {
        position: MAIN_POSITION,
        label: main.title.clone(),
        hover: hover_text(&main.title, &main.artist, &main.year_label()),
        role: NodeRole::Main,
    });

    let mut positions = HashMap::with_capacity(count + 1);
    positions.insert(graph.main_index(), MAIN_POSITION);

    for (i, (idx, node)) in samples.iter().enumerate() {
        let position = Position {
            x: sample_x(i, count),
            y: SAMPLE_ROW_Y,
        };
        positions.insert(*idx, position);
        let r = &node.record;
        nodes.push(NodeMarker {
            position,
            label: r.title.clone(),
            hover: hover_text(&r.title, &r.artist, &r.year_label()),
            role: node.role,
        });
    }

    for (source, target) in graph.edges() {
        if let (Some(&from), Some(&to)) = (positions.get(&source), positions.get(&target)) {
            edges.push(EdgeSegment { from, to });
        }
    }

    Figure { edges, nodes }
}

fn hover_text(title: &str, artist: &str, year: &str) -> String {
    format!("{title}\n{artist}\n{year}")
}

impl Figure {
    /// Node extents plus padding; a unit box around the origin when empty
    pub fn bounds(&self) -> FigureBounds {
        let mut positions = self.nodes.iter().map(|n| n.position);
        let Some(first) = positions.next() else {
            return FigureBounds {
                min_x: -PAD_X,
                max_x: PAD_X,
                min_y: -PAD_Y,
                max_y: PAD_Y,
            };
        };

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for p in positions {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        FigureBounds {
            min_x: min_x - PAD_X,
            max_x: max_x + PAD_X,
            min_y: min_y - PAD_Y,
            max_y: max_y + PAD_Y,
        }
    }

    /// The node whose marker is within `radius` pixels of `(px, py)`
    pub fn node_at(&self, viewport: &Viewport, px: f32, py: f32, radius: f32) -> Option<&NodeMarker> {
        let bounds = self.bounds();
        self.nodes
            .iter()
            .map(|node| {
                let (x, y) = viewport.project(node.position, &bounds);
                (node, (x - px).powi(2) + (y - py).powi(2))
            })
            .filter(|(_, dist_sq)| *dist_sq <= radius * radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(node, _)| node)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Map a figure-space position to pixels (y grows downward)
    pub fn project(&self, position: Position, bounds: &FigureBounds) -> (f32, f32) {
        let inner_w = (self.width - 2.0 * self.margin).max(1.0);
        let inner_h = (self.height - 2.0 * self.margin).max(1.0);
        let span_x = (bounds.max_x - bounds.min_x).max(f32::EPSILON);
        let span_y = (bounds.max_y - bounds.min_y).max(f32::EPSILON);

        let x = self.margin + (position.x - bounds.min_x) / span_x * inner_w;
        let y = self.margin + (bounds.max_y - position.y) / span_y * inner_h;
        (x, y)
    }
}
