use crate::domain::error::GraphError;
use crate::domain::graph::Graph;
use anyhow::Result;
use tokio::fs;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// A line the loader skipped, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line_number: usize,
    pub error: GraphError,
}

#[derive(Debug, Clone, Default)]
pub struct EdgeListLoad {
    pub graph: Graph,
    pub rejected: Vec<RejectedLine>,
}

impl EdgeListLoad {
    fn accept(&mut self, line_number: usize, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Err(error) = self.graph.insert(line) {
            self.rejected.push(RejectedLine { line_number, error });
        }
    }

    fn finish(mut self) -> Self {
        self.graph.sort_by_name();
        self
    }
}

/// Parses edge-list text. Blank lines are ignored; malformed lines are
/// collected and loading continues.
pub fn parse_edge_list(text: &str) -> EdgeListLoad {
    let mut load = EdgeListLoad::default();
    for (i, line) in text.lines().enumerate() {
        load.accept(i + 1, line);
    }
    load.finish()
}

pub async fn read_edge_list_file(path: &str) -> Result<EdgeListLoad> {
    let raw = fs::read_to_string(path).await?;
    Ok(parse_edge_list(&raw))
}

/// Interactive flavour: reads until the first blank line or EOF.
pub async fn read_edge_list_until_blank<R>(reader: R) -> Result<EdgeListLoad>
where
    R: AsyncBufRead + Unpin,
{
    let mut load = EdgeListLoad::default();
    let mut lines = reader.lines();
    let mut line_number = 0;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            break;
        }
        load.accept(line_number, &line);
    }
    Ok(load.finish())
}

pub async fn read_edge_list_stdin() -> Result<EdgeListLoad> {
    read_edge_list_until_blank(BufReader::new(tokio::io::stdin())).await
}

pub fn format_edge_list(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.edge_count() * 8);
    for edge in graph.edges() {
        out.push_str(&edge.source);
        out.push(' ');
        out.push_str(&edge.target);
        out.push('\n');
    }
    out
}

pub async fn write_edge_list_file(path: &str, graph: &Graph) -> Result<()> {
    fs::write(path, format_edge_list(graph)).await?;
    Ok(())
}
