//! Star graph of a song and its samples, drawn on an iced canvas.
//!
//! Features:
//! - Edges from the main song down to each sample
//! - Colored markers per node role, with a short label underneath
//! - Hover tooltip (title, artist, year) for the node under the cursor

use iced::alignment::{Horizontal, Vertical};
use iced::mouse::Cursor;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{Element, Length, Pixels, Point, Rectangle, Size, Theme};

use super::messages::Message;
use super::theme::{self, color};
use crate::graph::{Figure, NodeMarker, Viewport};

/// Labels longer than this are shortened under the marker; hover shows the full text
const MAX_LABEL_CHARS: usize = 28;

/// Canvas program drawing a laid-out [`Figure`].
pub struct GraphCanvas {
    figure: Figure,
}

impl GraphCanvas {
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }
}

impl canvas::Program<Message> for GraphCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), color::SURFACE);

        let viewport = Viewport::new(bounds.width, bounds.height, theme::graph::MARGIN);
        let figure_bounds = self.figure.bounds();
        let to_point = |p| {
            let (x, y) = viewport.project(p, &figure_bounds);
            Point::new(x, y)
        };

        for edge in &self.figure.edges {
            frame.stroke(
                &Path::line(to_point(edge.from), to_point(edge.to)),
                Stroke::default().with_color(color::EDGE).with_width(1.5),
            );
        }

        for node in &self.figure.nodes {
            let center = to_point(node.position);
            frame.fill(
                &Path::circle(center, theme::graph::NODE_RADIUS),
                color::node(node.role),
            );
            frame.fill_text(canvas::Text {
                content: short_label(&node.label),
                position: Point::new(center.x, center.y + theme::graph::NODE_RADIUS + 4.0),
                color: color::TEXT_PRIMARY,
                size: Pixels(theme::typography::SIZE_SMALL as f32),
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Top,
                ..canvas::Text::default()
            });
        }

        if let Some(position) = cursor.position_in(bounds)
            && let Some(node) = self.figure.node_at(
                &viewport,
                position.x,
                position.y,
                theme::graph::HOVER_RADIUS,
            )
        {
            draw_tooltip(&mut frame, bounds.size(), position, node);
        }

        vec![frame.into_geometry()]
    }
}

/// Hover box next to the cursor, kept inside the canvas
fn draw_tooltip(frame: &mut Frame, size: Size, cursor: Point, node: &NodeMarker) {
    let font_size = theme::typography::SIZE_SMALL as f32;
    let line_height = font_size * 1.4;
    let lines: Vec<&str> = node.hover.lines().collect();
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    // Rough glyph width; good enough for a tooltip box
    let width = widest as f32 * font_size * 0.6 + 16.0;
    let height = lines.len() as f32 * line_height + 12.0;

    let x = (cursor.x + 12.0).min(size.width - width).max(0.0);
    let y = (cursor.y + 12.0).min(size.height - height).max(0.0);

    frame.fill_rectangle(Point::new(x, y), Size::new(width, height), color::SURFACE_ELEVATED);
    frame.stroke(
        &Path::rectangle(Point::new(x, y), Size::new(width, height)),
        Stroke::default().with_color(color::node(node.role)).with_width(1.0),
    );

    for (i, line) in lines.iter().enumerate() {
        frame.fill_text(canvas::Text {
            content: (*line).to_string(),
            position: Point::new(x + 8.0, y + 6.0 + i as f32 * line_height),
            color: if i == 0 {
                color::TEXT_PRIMARY
            } else {
                color::TEXT_MUTED
            },
            size: Pixels(font_size),
            ..canvas::Text::default()
        });
    }
}

fn short_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let mut short: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
    short.push('…');
    short
}

/// Build the canvas element for a figure
pub fn graph_canvas(figure: &Figure) -> Element<'static, Message> {
    Canvas::new(GraphCanvas::new(figure.clone()))
        .width(Length::Fill)
        .height(Length::Fixed(theme::graph::CANVAS_HEIGHT))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_keeps_short_text() {
        assert_eq!(short_label("Funky Drummer"), "Funky Drummer");
    }

    #[test]
    fn test_short_label_truncates_long_text() {
        let long = "Impeach the President by The Honey Drippers (1973)";
        let short = short_label(long);
        assert_eq!(short.chars().count(), MAX_LABEL_CHARS);
        assert!(short.ends_with('…'));
    }
}
