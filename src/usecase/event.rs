use crate::usecase::stats::AnalyzeStats;
use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        source: String,
        vertices: usize,
        edges: usize,
    },

    EdgeRejected {
        line_number: usize,
        reason: String,
    },

    SccComputed {
        vertices: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
        largest_component: usize,
        elapsed_micros: u64,
    },

    ComponentFound {
        index: usize,
        members: Vec<String>,
    },

    BenchmarkFinished {
        iterations: usize,
        mean_micros: u64,
    },

    Finished {
        stats: AnalyzeStats,
    },
}

pub(crate) async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
