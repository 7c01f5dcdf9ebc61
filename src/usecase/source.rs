use crate::infrastructure::edge_list::{read_edge_list_file, read_edge_list_stdin, EdgeListLoad};
use crate::infrastructure::generators::{daisy_chain_graph, random_graph};
use crate::usecase::event::{emit, AppEvent};
use anyhow::{Context, Result};
use tokio::sync::mpsc;

/// Where a graph comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    File(String),
    Stdin,
    Random { vertices: usize, seed: Option<u64> },
    DaisyChain { links: usize },
}

impl GraphSource {
    pub fn describe(&self) -> String {
        match self {
            GraphSource::File(path) => format!("file:{path}"),
            GraphSource::Stdin => "stdin".to_string(),
            GraphSource::Random { vertices, seed } => match seed {
                Some(seed) => format!("random:{vertices}:seed={seed}"),
                None => format!("random:{vertices}"),
            },
            GraphSource::DaisyChain { links } => format!("daisy:{links}"),
        }
    }
}

/// Builds the graph for `source`. Rejected lines are reported as events and
/// returned alongside the graph; they never fail the load.
pub async fn load_graph(
    source: &GraphSource,
    sink: &Option<mpsc::Sender<AppEvent>>,
) -> Result<EdgeListLoad> {
    emit(sink, AppEvent::PhaseStarted { name: "load".into() }).await;

    let load = match source {
        GraphSource::File(path) => read_edge_list_file(path)
            .await
            .with_context(|| format!("reading edge list: {path}"))?,
        GraphSource::Stdin => read_edge_list_stdin()
            .await
            .context("reading edge list from stdin")?,
        GraphSource::Random { vertices, seed } => EdgeListLoad {
            graph: random_graph(*vertices, *seed),
            rejected: Vec::new(),
        },
        GraphSource::DaisyChain { links } => EdgeListLoad {
            graph: daisy_chain_graph(*links),
            rejected: Vec::new(),
        },
    };

    for rejected in load.rejected.iter() {
        emit(
            sink,
            AppEvent::EdgeRejected {
                line_number: rejected.line_number,
                reason: rejected.error.to_string(),
            },
        )
        .await;
    }

    emit(
        sink,
        AppEvent::GraphLoaded {
            source: source.describe(),
            vertices: load.graph.vertex_count(),
            edges: load.graph.edge_count(),
        },
    )
    .await;
    emit(sink, AppEvent::PhaseFinished { name: "load".into() }).await;

    Ok(load)
}
