//! SVG drawing of the lattice graph

use std::fmt;

use crate::graph::instance::{Instance, Node};
use crate::io::configuration::SVG_SCALE;

fn scaled(value: f64) -> f64 {
    value * SVG_SCALE
}

fn render_edge(f: &mut fmt::Formatter<'_>, a: Node, b: Node) -> fmt::Result {
    writeln!(
        f,
        r#"    <line x1="{:?}" y1="{:?}" x2="{:?}" y2="{:?}" stroke="black" stroke-width="{:?}" />"#,
        scaled(a.x as f64),
        scaled(a.y as f64),
        scaled(b.x as f64),
        scaled(b.y as f64),
        scaled(0.01)
    )
}

fn render_node(f: &mut fmt::Formatter<'_>, node: Node) -> fmt::Result {
    writeln!(
        f,
        r#"    <circle cx="{:?}" cy="{:?}" r="{:?}" stroke="black" stroke-width="{:?}" fill="green" />"#,
        scaled(node.x as f64),
        scaled(node.y as f64),
        scaled(0.1),
        scaled(0.01)
    )
}

fn render_label(f: &mut fmt::Formatter<'_>, node: Node, id: u32) -> fmt::Result {
    writeln!(
        f,
        r#"    <text x="{:?}" y="{:?}" font-size="{:?}" fill="white" text-anchor="middle">{id}</text>"#,
        scaled(node.x as f64),
        scaled(node.y as f64 + 0.04),
        scaled(0.1)
    )
}

/// Drawing with one group each for edges, nodes and labels
struct SvgDrawing<'a>(&'a Instance);

impl fmt::Display for SvgDrawing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instance = self.0;
        let extent = scaled(instance.params().side as f64);
        let shift = scaled(-0.5);

        writeln!(
            f,
            r#"<svg height="{extent:?}" width="{extent:?}" viewBox="{shift:?} {shift:?} {extent:?} {extent:?}" xmlns="http://www.w3.org/2000/svg">"#
        )?;

        writeln!(f, "  <g id=\"edges\">")?;
        for &(a, b) in instance.edges() {
            if let (Some(&from), Some(&to)) = (instance.nodes().get(&a), instance.nodes().get(&b)) {
                render_edge(f, from, to)?;
            }
        }
        writeln!(f, "  </g>")?;

        writeln!(f, "  <g id=\"nodes\">")?;
        for &node in instance.nodes().values() {
            render_node(f, node)?;
        }
        writeln!(f, "  </g>")?;

        writeln!(f, "  <g id=\"labels\">")?;
        for (&id, &node) in instance.nodes() {
            render_label(f, node, id)?;
        }
        writeln!(f, "  </g>")?;

        writeln!(f, "</svg>")
    }
}

/// Render nodes as circles, edges as lines and ids as labels
///
/// The view box covers the `L × L` lattice with half a site of margin on the
/// top left.
pub fn to_svg(instance: &Instance) -> String {
    SvgDrawing(instance).to_string()
}
