//! Standalone SVG export of a figure.

use std::fmt::Write;

use super::render::{Figure, Viewport};

const MARGIN: f32 = 48.0;
const NODE_RADIUS: f32 = 10.0;
const EDGE_COLOR: &str = "#888888";

impl Figure {
    /// Render the figure as an SVG document of the given pixel size.
    ///
    /// Labels sit under their markers; hover text is carried in `<title>`
    /// elements, which browsers show as tooltips.
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let viewport = Viewport::new(width as f32, height as f32, MARGIN);
        let bounds = self.bounds();
        let mut svg = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#);

        for edge in &self.edges {
            let (x1, y1) = viewport.project(edge.from, &bounds);
            let (x2, y2) = viewport.project(edge.to, &bounds);
            let _ = writeln!(
                svg,
                r#"  <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{EDGE_COLOR}" stroke-width="1"/>"#
            );
        }

        for node in &self.nodes {
            let (cx, cy) = viewport.project(node.position, &bounds);
            let _ = writeln!(svg, "  <g>");
            let _ = writeln!(svg, "    <title>{}</title>", escape_xml(&node.hover));
            let _ = writeln!(
                svg,
                r#"    <circle cx="{cx:.1}" cy="{cy:.1}" r="{NODE_RADIUS}" fill="{}"/>"#,
                node.role.hex()
            );
            let _ = writeln!(
                svg,
                r#"    <text x="{cx:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="12">{}</text>"#,
                cy + NODE_RADIUS + 14.0,
                escape_xml(&node.label)
            );
            let _ = writeln!(svg, "  </g>");
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, render};
    use crate::test_utils::record;

    #[test]
    fn test_svg_structure() {
        let graph = build_graph(
            &record(777, "Hip Hop Hooray", Some(1993)),
            &[record(1, "A", None), record(2, "B", None)],
        );
        let svg = render(&graph).to_svg(800, 600);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("Hip Hop Hooray"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let graph = build_graph(&record(1, "Rock & Roll <Live>", None), &[]);
        let svg = render(&graph).to_svg(200, 200);
        assert!(svg.contains("Rock &amp; Roll &lt;Live&gt;"));
        assert!(!svg.contains("<Live>"));
    }

    #[test]
    fn test_empty_figure_svg() {
        let svg = Figure::default().to_svg(100, 100);
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("<line"));
    }
}
