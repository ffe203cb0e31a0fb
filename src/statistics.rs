use crate::algorithms::common::{Mode, Outcome, SearchResult};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    pub mode: Mode,
    pub outcome: Outcome,
    pub cells_visited: usize,
    /// Moves along the path; `None` when the goal was not reached.
    pub path_steps: Option<usize>,
    pub search_time: Duration,
}

impl SearchStats {
    pub fn from_result(result: &SearchResult, search_time: Duration) -> Self {
        SearchStats {
            mode: result.mode,
            outcome: result.outcome,
            cells_visited: result.visitation_trace.len(),
            path_steps: result.steps(),
            search_time,
        }
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.mode)?;
        writeln!(f, "Outcome: {:?}", self.outcome)?;
        writeln!(f, "Cells visited: {}", self.cells_visited)?;
        match self.path_steps {
            Some(steps) => writeln!(f, "Path length: {} moves", steps)?,
            None => writeln!(f, "Path length: unreachable")?,
        }
        writeln!(f, "Search time: {:.2?}", self.search_time)?;
        Ok(())
    }
}

/// Side-by-side results of every algorithm on one board.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub rows: Vec<SearchStats>,
    /// Move count from the independent reference search.
    pub optimal_steps: Option<usize>,
}

impl ComparisonReport {
    /// True when every algorithm matched the reference length.
    pub fn all_optimal(&self) -> bool {
        self.rows.iter().all(|row| row.path_steps == self.optimal_steps)
    }

    pub fn fewest_visited(&self) -> Option<&SearchStats> {
        self.rows.iter().min_by_key(|row| row.cells_visited)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== ALGORITHM COMPARISON RESULTS ===")?;
        writeln!(
            f,
            "{:<12} {:<10} {:<10} {:<10} {:<12}",
            "Algorithm", "Outcome", "Visited", "Moves", "Time"
        )?;
        writeln!(f, "{}", "-".repeat(58))?;
        for row in &self.rows {
            let moves = row
                .path_steps
                .map_or_else(|| "-".to_string(), |steps| steps.to_string());
            writeln!(
                f,
                "{:<12} {:<10} {:<10} {:<10} {:<12}",
                row.mode.to_string(),
                format!("{:?}", row.outcome),
                row.cells_visited,
                moves,
                format!("{:.2?}", row.search_time)
            )?;
        }
        writeln!(f)?;
        match self.optimal_steps {
            Some(steps) => writeln!(f, "Reference optimal path: {} moves", steps)?,
            None => writeln!(f, "Reference search: goal unreachable")?,
        }
        if !self.all_optimal() {
            writeln!(f, "⚠ At least one algorithm disagrees with the reference length")?;
        }
        if let Some(best) = self.fewest_visited() {
            writeln!(
                f,
                "Fewest cells visited: {} ({})",
                best.mode, best.cells_visited
            )?;
        }
        Ok(())
    }
}
