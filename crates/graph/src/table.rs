use serde::Serialize;

use crate::Graph;

/// Square matrix of direct edge weights, rows and columns in node order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceTable {
    names: Vec<String>,
    cells: Vec<Vec<Option<u32>>>,
}

impl DistanceTable {
    pub fn from_graph(graph: &Graph) -> Self {
        let names: Vec<String> = graph.nodes().map(str::to_owned).collect();
        let n = names.len();
        let mut cells = vec![vec![None; n]; n];
        for edge in graph.edges() {
            // edges are reported once, so fill both triangles here
            if let (Some(a), Some(b)) = (graph.index_of(&edge.source), graph.index_of(&edge.target)) {
                cells[a][b] = Some(edge.weight);
                cells[b][a] = Some(edge.weight);
            }
        }
        Self { names, cells }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Rows paired with their node name.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Option<u32>])> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}
