use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphLoaded {
            source,
            vertices,
            edges,
        } => {
            json!({"type":"graph_loaded","source":source,"vertices":vertices,"edges":edges})
        }
        AppEvent::EdgeRejected {
            line_number,
            reason,
        } => {
            json!({"type":"edge_rejected","line_number":line_number,"reason":reason})
        }
        AppEvent::SccComputed {
            vertices,
            edges,
            components,
            cyclic_components,
            largest_component,
            elapsed_micros,
        } => {
            json!({"type":"scc_computed","vertices":vertices,"edges":edges,"components":components,"cyclic_components":cyclic_components,"largest_component":largest_component,"elapsed_micros":elapsed_micros})
        }
        AppEvent::ComponentFound { index, members } => {
            json!({"type":"component_found","index":index,"members":members})
        }
        AppEvent::BenchmarkFinished {
            iterations,
            mean_micros,
        } => {
            json!({"type":"benchmark_finished","iterations":iterations,"mean_micros":mean_micros})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
