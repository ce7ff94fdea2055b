use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated across propagation and search for one solve.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Arcs dequeued and revised during AC-3.
    pub revisions: u64,
    /// Revise calls that removed at least one value.
    pub prunings: u64,
    /// Search-tree nodes expanded.
    pub nodes_visited: u64,
    /// Abandoned branches rolled back during search.
    pub backtracks: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));
    table.add_row(Row::new(vec![
        Cell::new("Revisions"),
        Cell::new(&stats.revisions.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Prunings"),
        Cell::new(&stats.prunings.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes Visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_includes_every_counter() {
        let stats = SearchStats {
            revisions: 1944,
            prunings: 12,
            nodes_visited: 81,
            backtracks: 3,
        };
        let rendered = render_stats_table(&stats);
        for needle in ["Revisions", "1944", "Prunings", "12", "81", "Backtracks", "3"] {
            assert!(rendered.contains(needle), "missing {needle}");
        }
    }
}
