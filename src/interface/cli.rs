use crate::domain::graph::SccResult;
use crate::infrastructure::edge_list::write_edge_list_file;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::usecase::analyze::{analyze_graph, benchmark_scc, micros};
use crate::usecase::event::AppEvent;
use crate::usecase::source::{load_graph, GraphSource};
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Components {
            source,
            emit_events,
            repeat,
        } => {
            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };
            let sink = Some(tx);

            let load = load_graph(&source, &sink).await?;
            for rejected in load.rejected.iter() {
                eprintln!(
                    "warning: skipped line {}: {}",
                    rejected.line_number, rejected.error
                );
            }

            let mut graph = load.graph;
            let detector = KosarajuSccDetector;

            let mean = if repeat > 0 {
                let mean = benchmark_scc(&mut graph, &detector, repeat, &sink)
                    .await
                    .with_context(|| format!("benchmarking components for {}", source.describe()))?;
                Some(mean)
            } else {
                None
            };

            let (result, stats) = analyze_graph(&mut graph, load.rejected.len(), &detector, sink)
                .await
                .with_context(|| format!("computing components for {}", source.describe()))?;

            if let Some(handle) = printer {
                handle.await.ok();
            } else {
                print!("{}", format_components(&result));
            }

            eprintln!(
                "summary: vertices={} edges={} rejected_lines={} components={} cyclic_components={} largest_component={} elapsed_us={}",
                stats.vertices,
                stats.edges,
                stats.rejected_lines,
                stats.components,
                stats.cyclic_components,
                stats.largest_component,
                stats.elapsed_micros
            );
            if let Some(mean) = mean {
                eprintln!("benchmark: iterations={repeat} mean_us={}", micros(mean));
            }

            Ok(())
        }

        Cli::Generate { source, output } => {
            let load = load_graph(&source, &None).await?;
            write_edge_list_file(&output, &load.graph)
                .await
                .with_context(|| format!("writing edge list: {output}"))?;

            eprintln!(
                "wrote {} edges over {} vertices to {output}",
                load.graph.edge_count(),
                load.graph.vertex_count()
            );
            Ok(())
        }
    }
}

/// One line per component, numbered from 1: `"1: a, b, c"`.
fn format_components(result: &SccResult) -> String {
    let mut out = String::new();
    for (i, members) in result.components.iter().enumerate() {
        out.push_str(&format!("{}: {}\n", i + 1, members.join(", ")));
    }
    out
}

#[derive(Debug)]
enum Cli {
    Components {
        source: GraphSource,
        emit_events: bool,
        repeat: usize,
    },
    Generate {
        source: GraphSource,
        output: String,
    },
}

/// Source flags shared by both subcommands.
#[derive(Debug, Default)]
struct SourceArgs {
    input: Option<String>,
    stdin: bool,
    random: Option<usize>,
    seed: Option<u64>,
    daisy: Option<usize>,
}

impl SourceArgs {
    /// Consumes the flag at `args[*i]` (and its value) if it is a source flag.
    fn take(&mut self, args: &[String], i: &mut usize) -> Result<bool> {
        match args[*i].as_str() {
            "--in" | "--input" => {
                *i += 1;
                self.input = args.get(*i).cloned();
            }
            "--stdin" => self.stdin = true,
            "--random" => {
                *i += 1;
                self.random = Some(parse_number(args.get(*i), "--random")?);
            }
            "--seed" => {
                *i += 1;
                self.seed = Some(parse_number(args.get(*i), "--seed")?);
            }
            "--daisy" => {
                *i += 1;
                self.daisy = Some(parse_number(args.get(*i), "--daisy")?);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn into_source(self, allow_text_sources: bool) -> Result<GraphSource> {
        if self.seed.is_some() && self.random.is_none() {
            return Err(anyhow!(format!("--seed requires --random\n\n{}", usage())));
        }

        let mut sources = Vec::new();
        if let Some(path) = self.input {
            sources.push(GraphSource::File(path));
        }
        if self.stdin {
            sources.push(GraphSource::Stdin);
        }
        if let Some(vertices) = self.random {
            sources.push(GraphSource::Random {
                vertices,
                seed: self.seed,
            });
        }
        if let Some(links) = self.daisy {
            sources.push(GraphSource::DaisyChain { links });
        }

        if sources.len() > 1 {
            return Err(anyhow!(format!(
                "conflicting graph sources: pick one\n\n{}",
                usage()
            )));
        }
        let source = sources
            .pop()
            .ok_or_else(|| anyhow!(format!("missing graph source\n\n{}", usage())))?;

        if !allow_text_sources && matches!(source, GraphSource::File(_) | GraphSource::Stdin) {
            return Err(anyhow!(format!(
                "generate needs --random or --daisy\n\n{}",
                usage()
            )));
        }
        Ok(source)
    }
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> components (--in <edges.txt> | --stdin | --random <n> [--seed <s>] | --daisy <n>) [--emit-events] [--repeat <n>]
        // <bin> generate (--random <n> [--seed <s>] | --daisy <n>) --out <edges.txt>
        if args.len() < 2 {
            return Err(anyhow!(usage()));
        }

        match args[1].as_str() {
            "components" => Self::parse_components(args),
            "generate" => Self::parse_generate(args),
            "-h" | "--help" => Err(anyhow!(usage())),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_components(args: &[String]) -> Result<Self> {
        let mut sources = SourceArgs::default();
        let mut emit_events = false;
        let mut repeat = 0usize;

        let mut i = 2;
        while i < args.len() {
            if sources.take(args, &mut i)? {
                i += 1;
                continue;
            }
            match args[i].as_str() {
                "--emit-events" => {
                    emit_events = true;
                }
                "--repeat" => {
                    i += 1;
                    repeat = parse_number(args.get(i), "--repeat")?;
                    if repeat == 0 {
                        return Err(anyhow!(format!("--repeat must be at least 1\n\n{}", usage())));
                    }
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(Cli::Components {
            source: sources.into_source(true)?,
            emit_events,
            repeat,
        })
    }

    fn parse_generate(args: &[String]) -> Result<Self> {
        let mut sources = SourceArgs::default();
        let mut output: Option<String> = None;

        let mut i = 2;
        while i < args.len() {
            if sources.take(args, &mut i)? {
                i += 1;
                continue;
            }
            match args[i].as_str() {
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let source = sources.into_source(false)?;
        let output =
            output.ok_or_else(|| anyhow!(format!("missing --out/--output\n\n{}", usage())))?;

        Ok(Cli::Generate { source, output })
    }
}

fn parse_number<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T> {
    let raw = value.ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))?;
    raw.parse::<T>()
        .map_err(|_| anyhow!(format!("invalid number for {flag}: {raw}\n\n{}", usage())))
}

fn usage() -> &'static str {
    "Usage:\n  scc-explorer components (--in <edges.txt> | --stdin | --random <n> [--seed <s>] | --daisy <n>) [--emit-events] [--repeat <n>]\n  scc-explorer generate (--random <n> [--seed <s>] | --daisy <n>) --out <edges.txt>\n\nInput:\n  One edge per line as two whitespace separated vertex names (\"u v\"). Blank lines are skipped,\n  malformed lines are reported on stderr and skipped. --stdin stops at the first blank line.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout instead of the component listing; summary goes to stderr.\n\nTiming:\n  --repeat <n> runs the computation n extra times and reports the mean wall time."
}
