//! arc-order CLI entry point.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arc_order::ingest::{
    CsvColumns, GraphInput, nodes_from_edges, parse_edge_list, read_edges_csv, read_nodes_csv,
};
use arc_order::{Error, OptimizeConfig, Strategy, count_crossings, optimize, optimize_grouped};

/// Order arc diagram nodes to reduce arc crossings.
#[derive(Parser, Debug)]
#[command(
    name = "arc-order",
    version = env!("ARC_ORDER_VERSION"),
    about = "Order arc diagram nodes to reduce arc crossings"
)]
struct Cli {
    /// Edge list file (reads from stdin if neither this nor --edges-csv is given)
    input: Option<String>,

    /// Edge table in CSV form
    #[arg(long = "edges-csv", conflicts_with = "input")]
    edges_csv: Option<String>,

    /// Node table in CSV form (node order and optional groups)
    #[arg(long = "nodes-csv", requires = "edges_csv")]
    nodes_csv: Option<String>,

    #[arg(long = "source-col", default_value = "source")]
    source_col: String,

    #[arg(long = "dest-col", default_value = "dest")]
    dest_col: String,

    #[arg(long = "node-col", default_value = "node")]
    node_col: String,

    #[arg(long = "group-col", default_value = "group")]
    group_col: String,

    /// Ordering strategy (original, avsdf, local-adjusting); best of all when omitted
    #[arg(short = 's', long = "strategy")]
    strategy: Option<Strategy>,

    /// Run a pairwise-swap local search pass after the strategy
    #[arg(long = "refine")]
    refine: bool,

    /// Keep groups contiguous
    #[arg(short = 'g', long = "grouped")]
    grouped: bool,

    /// Order only the dense part; pendant chains go last
    #[arg(long = "prune")]
    prune: bool,

    /// Refuse graphs with more nodes than this
    #[arg(long = "max-nodes")]
    max_nodes: Option<usize>,

    /// Print the crossing count of the input order and exit
    #[arg(short = 'c', long = "count")]
    count: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Log progress to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = match load_input(&cli) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let rendered = match run(&cli, &input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_input(cli: &Cli) -> arc_order::Result<GraphInput> {
    if let Some(ref edges_path) = cli.edges_csv {
        let columns = CsvColumns {
            source: cli.source_col.clone(),
            dest: cli.dest_col.clone(),
            node: cli.node_col.clone(),
            group: cli.group_col.clone(),
        };
        return load_csv(edges_path, cli.nodes_csv.as_deref(), &columns);
    }

    let text = if let Some(ref path) = cli.input {
        fs::read_to_string(path).map_err(|e| Error::io(path, e))?
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::io("<stdin>", e))?;
        buf
    };
    parse_edge_list(&text)
}

fn load_csv(
    edges_path: &str,
    nodes_path: Option<&str>,
    columns: &CsvColumns,
) -> arc_order::Result<GraphInput> {
    let open = |path: &str| File::open(path).map_err(|e| Error::io(path, e));

    let edges = read_edges_csv(open(edges_path)?, &columns.source, &columns.dest)?;
    let (nodes, groups) = match nodes_path {
        Some(path) => read_nodes_csv(open(path)?, &columns.node, &columns.group)?,
        None => (nodes_from_edges(&edges), Default::default()),
    };
    Ok(GraphInput {
        nodes,
        edges,
        groups,
    })
}

fn run(cli: &Cli, input: &GraphInput) -> arc_order::Result<String> {
    if cli.count {
        let crossings = count_crossings(&input.nodes, &input.edges)?;
        return Ok(format!("{}\n", crossings));
    }

    let config = OptimizeConfig {
        strategy: cli.strategy,
        refine: cli.refine,
        prune_branches: cli.prune,
        max_nodes: cli.max_nodes,
    };
    let optimized = if cli.grouped {
        optimize_grouped(&input.nodes, &input.groups, &input.edges, &config)?
    } else {
        optimize(&input.nodes, &input.edges, &config)?
    };
    tracing::info!(
        strategy = %optimized.strategy,
        before = optimized.crossings_before,
        after = optimized.crossings_after,
        "ordering ready"
    );

    let mut out = String::new();
    for label in &optimized.ordering {
        out.push_str(label);
        out.push('\n');
    }
    Ok(out)
}
