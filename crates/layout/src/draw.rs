use svg::Document;
use svg::node::element::{Circle, Group, Line, Rectangle, Text};

use crate::scene::Scene;
use crate::style::RenderStyle;

/// Encodes `scene` as an SVG document.
///
/// Paint order: background, strokes, weight labels, node markers, node names.
pub fn scene_to_svg(scene: &Scene, style: &RenderStyle) -> String {
    let mut document = Document::new()
        .set("width", scene.width)
        .set("height", scene.height)
        .set("viewBox", (0.0, 0.0, scene.width, scene.height))
        .set("font-family", style.font_family.as_str())
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", style.background.as_str()),
        );

    let mut strokes = Group::new().set("id", "edges");
    for edge in &scene.edges {
        let (color, width) = if edge.on_route {
            (&style.route_color, style.route_width)
        } else {
            (&style.edge_color, style.edge_width)
        };
        strokes = strokes.add(
            Line::new()
                .set("x1", edge.from.x)
                .set("y1", edge.from.y)
                .set("x2", edge.to.x)
                .set("y2", edge.to.y)
                .set("stroke", color.as_str())
                .set("stroke-width", width)
                .set("data-route", edge.on_route),
        );
    }
    document = document.add(strokes);

    let patch = style.label_patch;
    let mut labels = Group::new().set("id", "weights");
    for edge in &scene.edges {
        let mid = edge.label_position();
        labels = labels
            .add(
                Rectangle::new()
                    .set("x", mid.x - patch.width / 2.0)
                    .set("y", mid.y - patch.height / 2.0)
                    .set("width", patch.width)
                    .set("height", patch.height)
                    .set("fill", style.background.as_str()),
            )
            .add(
                Text::new(edge.weight.to_string())
                    .set("x", mid.x)
                    .set("y", mid.y)
                    .set("font-size", style.weight_font_size)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("fill", style.text_color.as_str()),
            );
    }
    document = document.add(labels);

    let mut markers = Group::new().set("id", "nodes");
    for node in &scene.nodes {
        markers = markers
            .add(
                Circle::new()
                    .set("cx", node.position.x)
                    .set("cy", node.position.y)
                    .set("r", style.node_radius)
                    .set("fill", style.node_color.as_str()),
            )
            .add(
                Text::new(node.id.as_str())
                    .set("x", node.position.x + style.node_radius + 4.0)
                    .set("y", node.position.y)
                    .set("font-size", style.node_font_size)
                    .set("dominant-baseline", "central")
                    .set("fill", style.text_color.as_str()),
            );
    }
    document = document.add(markers);

    document.to_string()
}
