use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;
use crate::usecase::event::{emit, AppEvent};
use crate::usecase::stats::AnalyzeStats;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the detector once and reports the partition.
///
/// `rejected_lines` is carried into the stats so a single summary covers
/// both loading and analysis.
pub async fn analyze_graph(
    graph: &mut Graph,
    rejected_lines: usize,
    scc: &dyn SccDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(SccResult, AnalyzeStats)> {
    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let result = scc.compute_scc(graph)?;

    let stats = AnalyzeStats {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        rejected_lines,
        components: result.components.len(),
        cyclic_components: result.cyclic_count(),
        largest_component: result.largest_component(),
        elapsed_micros: micros(result.elapsed),
    };

    emit(
        &sink,
        AppEvent::SccComputed {
            vertices: stats.vertices,
            edges: stats.edges,
            components: stats.components,
            cyclic_components: stats.cyclic_components,
            largest_component: stats.largest_component,
            elapsed_micros: stats.elapsed_micros,
        },
    )
    .await;

    for (index, members) in result.components.iter().enumerate() {
        emit(
            &sink,
            AppEvent::ComponentFound {
                index,
                members: members.clone(),
            },
        )
        .await;
    }
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    Ok((result, stats))
}

/// Whole microseconds, pinned at `u64::MAX` for durations that do not fit.
pub fn micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

/// Mean detector wall time over `iterations` runs on the same graph.
pub async fn benchmark_scc(
    graph: &mut Graph,
    scc: &dyn SccDetector,
    iterations: usize,
    sink: &Option<mpsc::Sender<AppEvent>>,
) -> Result<Duration> {
    if iterations == 0 {
        return Ok(Duration::ZERO);
    }
    emit(
        sink,
        AppEvent::PhaseStarted {
            name: "benchmark".into(),
        },
    )
    .await;

    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        total += scc.compute_scc(graph)?.elapsed;
    }
    let mean_nanos = total.as_nanos() / iterations as u128;
    let mean = Duration::from_nanos(u64::try_from(mean_nanos).unwrap_or(u64::MAX));

    emit(
        sink,
        AppEvent::BenchmarkFinished {
            iterations,
            mean_micros: micros(mean),
        },
    )
    .await;
    emit(
        sink,
        AppEvent::PhaseFinished {
            name: "benchmark".into(),
        },
    )
    .await;
    Ok(mean)
}
