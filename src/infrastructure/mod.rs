// Infrastructure layer: algorithms behind the ports, edge-list IO, eventing
pub mod dfs;
pub mod edge_list;
pub mod event_ndjson;
pub mod generators;
pub mod scc_kosaraju;
