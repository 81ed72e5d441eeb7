//! Place and wireframe rules.

use crate::style::StyleTable;

pub fn places() -> StyleTable {
    StyleTable::new()
        .add("cx", 0)
        .add("cy", 0)
        .add("r", 7)
        .add("stroke", "0px")
        .add("fill", "#000")
}

/// Vertices of the debug wireframe graph.
pub fn wireframe_vertices() -> StyleTable {
    StyleTable::new()
        .add("cx", 0)
        .add("cy", 0)
        .add("r", 3)
        .add("fill", "#000")
}

/// Edges of the debug wireframe graph.
pub fn wireframe_edges() -> StyleTable {
    StyleTable::new()
        .add("stroke", "#444")
        .add("stroke-width", 2)
        .add("stroke-dasharray", "3px 2px")
        .add("fill", "none")
}
