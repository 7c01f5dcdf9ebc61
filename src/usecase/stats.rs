use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyzeStats {
    pub vertices: usize,
    pub edges: usize,
    pub rejected_lines: usize,
    pub components: usize,
    pub cyclic_components: usize,
    pub largest_component: usize,
    pub elapsed_micros: u64,
}
