//! credgraph CLI: belief revision over credibility graphs.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};

use credibility_graphs::config::{KbConfig, PolicyKind};
use credibility_graphs::credibility::{Credibility, NumericOrder, Reachability, Similarity};
use credibility_graphs::error::ParseError;
use credibility_graphs::export::{GraphExport, to_dot, to_graphml, write_to};
use credibility_graphs::extremes::Extreme;
use credibility_graphs::graph::{Comparison, CredibilityGraph, CredibilityObject, Label};
use credibility_graphs::kb::KnowledgeBase;
use credibility_graphs::order::rank_layers;
use credibility_graphs::parse::parse_objects;

#[derive(Parser)]
#[command(name = "credgraph", version, about = "Belief revision over credibility graphs")]
struct Cli {
    /// Knowledge base as text, e.g. "(A,B,X),(B,C,Y)".
    #[arg(long, global = true)]
    kb: Option<String>,

    /// Read the knowledge base text from a file.
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured credibility policy.
    #[arg(long, global = true, value_enum)]
    policy: Option<PolicyArg>,

    /// Adopt the input graph as-is instead of expanding claims one by one.
    #[arg(long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Reachability,
    Accuracy,
    Similarity,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Reachability => PolicyKind::Reachability,
            PolicyArg::Accuracy => PolicyKind::Accuracy,
            PolicyArg::Similarity => PolicyKind::Similarity,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ExtremeArg {
    Min,
    Max,
}

impl From<ExtremeArg> for Extreme {
    fn from(arg: ExtremeArg) -> Self {
        match arg {
            ExtremeArg::Min => Extreme::Min,
            ExtremeArg::Max => Extreme::Max,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Dot,
    Graphml,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List every simple path between two vertices.
    Paths { source: String, target: String },

    /// Compare two vertices in the credibility order.
    Compare { a: String, b: String },

    /// Least or most credible edges on every path between two vertices.
    Extremes {
        source: String,
        target: String,
        #[arg(long, value_enum, default_value = "min")]
        extreme: ExtremeArg,
    },

    /// Most credible reporters among the weakest links between two vertices.
    Reliability { source: String, target: String },

    /// Cut every path from source to target.
    Contract { source: String, target: String },

    /// Revise with a single claim, e.g. "(A4,A1,F3)".
    Revise {
        object: String,
        /// Contract the opposite order unconditionally.
        #[arg(long)]
        prioritized: bool,
    },

    /// Merge another knowledge base into this one.
    Merge {
        /// The other knowledge base as text.
        other: String,
    },

    /// List the elementary cycles of the graph (useful with --raw).
    Cycles,

    /// Group vertices into credibility ranks, least credible first.
    Ranks,

    /// Export the graph.
    Export {
        #[arg(long, value_enum, default_value = "dot")]
        format: ExportFormat,
        /// Write to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => KbConfig::load(path)?,
        None => KbConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    let text = match (&cli.kb, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path).into_diagnostic()?,
        (None, None) => String::new(),
    };

    let policy = cli.policy.map(PolicyKind::from).unwrap_or(config.policy);
    match policy {
        PolicyKind::Reachability => {
            let kb = load::<String, _>(&text, Reachability, cli.raw, &config)?;
            run(kb, cli.command, &config)
        }
        PolicyKind::Accuracy => {
            let table = config.accuracy_table::<String>();
            let kb = load::<String, _>(&text, table, cli.raw, &config)?;
            run(kb, cli.command, &config)
        }
        PolicyKind::Similarity => {
            let kb = load::<Similarity, _>(&text, NumericOrder, cli.raw, &config)?;
            run(kb, cli.command, &config)
        }
    }
}

fn load<L, C>(text: &str, credibility: C, raw: bool, config: &KbConfig) -> Result<KnowledgeBase<String, L, C>>
where
    L: Label + FromStr,
    L::Err: Display,
    C: Credibility<String, L>,
{
    let kb = if raw {
        let objects = parse_objects(text)?;
        KnowledgeBase::from_graph(CredibilityGraph::from_objects(objects), credibility)
    } else {
        KnowledgeBase::parse(text, credibility)?
    };
    Ok(match config.max_path_len {
        Some(max_len) => kb.with_path_limit(max_len),
        None => kb,
    })
}

fn parse_single<L>(text: &str) -> Result<CredibilityObject<String, L>>
where
    L: FromStr,
    L::Err: Display,
{
    let mut objects = parse_objects(text)?;
    if objects.len() != 1 {
        miette::bail!("expected exactly one claim, found {}", objects.len());
    }
    objects.pop().ok_or_else(|| {
        ParseError::UnexpectedEnd {
            expected: "a claim".into(),
        }
        .into()
    })
}

fn print_edges<'a, L, I>(edges: I)
where
    L: Display + 'a,
    I: IntoIterator<Item = &'a CredibilityObject<String, L>>,
{
    let mut lines: Vec<String> = edges.into_iter().map(ToString::to_string).collect();
    lines.sort();
    for line in lines {
        println!("  {line}");
    }
}

fn run<L, C>(mut kb: KnowledgeBase<String, L, C>, command: Commands, config: &KbConfig) -> Result<()>
where
    L: Label + Display + FromStr,
    L::Err: Display,
    C: Credibility<String, L> + Clone,
{
    match command {
        Commands::Paths { source, target } => {
            let paths = kb.all_paths(&source, &target);
            println!("{} path(s) from {source} to {target}:", paths.len());
            for path in &paths {
                let steps: Vec<String> = path.edges().iter().map(ToString::to_string).collect();
                println!("  {}", steps.join(" -> "));
            }
        }

        Commands::Compare { a, b } => {
            let relation = match kb.compare(&a, &b)? {
                Comparison::Less => "less credible than",
                Comparison::More => "more credible than",
                Comparison::Incomparable => "incomparable to",
            };
            println!("{a} is {relation} {b}");
        }

        Commands::Extremes {
            source,
            target,
            extreme,
        } => {
            let extremes = kb.extremes_between(&source, &target, extreme.into());
            println!("{} edge(s):", extremes.len());
            print_edges(&extremes);
        }

        Commands::Reliability { source, target } => {
            let mut reporters: Vec<String> = kb
                .reliability(&source, &target)
                .iter()
                .map(ToString::to_string)
                .collect();
            reporters.sort();
            println!("reliability({source}, {target}) = {{{}}}", reporters.join(", "));
        }

        Commands::Contract { source, target } => {
            let removed = kb.contraction(&source, &target);
            println!("Removed {} edge(s):", removed.len());
            print_edges(&removed);
            println!("{}", kb.graph());
        }

        Commands::Revise {
            object,
            prioritized,
        } => {
            let obj = parse_single::<L>(&object)?;
            let accepted = if prioritized {
                kb.prioritized_revision(obj)
            } else {
                kb.non_prioritized_revision(obj)
            };
            println!("{}", if accepted { "accepted" } else { "rejected" });
            println!("{}", kb.graph());
        }

        Commands::Merge { other } => {
            let other = KnowledgeBase::parse(&other, kb.credibility().clone())?;
            let report = kb.merge(&other);
            println!(
                "Merged {} edge(s), found {} cycle(s), removed {} edge(s):",
                report.added,
                report.cycles,
                report.removed.len()
            );
            print_edges(&report.removed);
            println!("{}", kb.graph());
        }

        Commands::Cycles => {
            let cycles = kb.graph().simple_cycles();
            println!("{} cycle(s):", cycles.len());
            for cycle in &cycles {
                println!("  {}", cycle.join(" -> "));
            }
        }

        Commands::Ranks => {
            for (rank, layer) in rank_layers(kb.graph())?.iter().enumerate() {
                println!("  {rank}: {}", layer.join(", "));
            }
        }

        Commands::Export { format, out } => {
            let rendered = match format {
                ExportFormat::Dot => to_dot(kb.graph(), &config.dot_options()),
                ExportFormat::Graphml => to_graphml(kb.graph()),
                ExportFormat::Json => GraphExport::from_graph(kb.graph()).to_json()?,
            };
            match out {
                Some(path) => {
                    write_to(&path, &rendered)?;
                    println!("Exported to {}", path.display());
                }
                None => print!("{rendered}"),
            }
        }
    }

    Ok(())
}
