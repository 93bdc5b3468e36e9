use tracing::info;

/// Diagnostic counters for one search invocation. Purely observational:
/// nothing here caps or aborts a search.
#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i32,
    /// Number of heuristic evaluations
    evaluated_nodes: i32,
    /// Number of nodes generated
    generated_nodes: i32,
    /// Time when the search started
    search_start_time: std::time::Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: std::time::Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            search_start_time: std::time::Instant::now(),
            last_log_time: std::time::Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i32;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> i32 {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> i32 {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> i32 {
        self.generated_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = std::time::Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes
        );
    }

    pub fn finalise_search(&mut self) {
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
