use serde::{Deserialize, Serialize};
use std::io::Read;
use strata::{Layout, LayoutConfig, LayoutDiagnostics};
use strata_graph::{DirectedGraph, GraphError};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Graph(GraphError),
    Layout(strata::LayoutError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Layout(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<GraphError> for CliError {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

impl From<strata::LayoutError> for CliError {
    fn from(value: strata::LayoutError) -> Self {
        Self::Layout(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    config: Option<String>,
    pretty: bool,
    diagnostics: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphDocument {
    #[serde(default)]
    config: Option<LayoutConfig>,
    #[serde(default)]
    nodes: Vec<NodeSpec>,
    #[serde(default)]
    edges: Vec<EdgeSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeSpec {
    id: String,
    width: f64,
    height: f64,
    #[serde(default = "default_weight")]
    weight: u32,
    #[serde(default)]
    padding: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeSpec {
    source: String,
    target: String,
    #[serde(default = "default_weight")]
    weight: u32,
}

fn default_weight() -> u32 {
    1
}

#[derive(Serialize)]
struct LayoutOut<'a> {
    layout: &'a Layout,
    diagnostics: &'a LayoutDiagnostics,
}

fn usage() -> &'static str {
    "strata-cli\n\
\n\
USAGE:\n\
  strata-cli [layout] [--pretty] [--diagnostics] [--config <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a JSON document: {\"config\"?, \"nodes\": [{\"id\", \"width\", \"height\", \"weight\"?, \"padding\"?}], \"edges\": [{\"source\", \"target\", \"weight\"?}]}.\n\
  - --config reads a layout config JSON file that replaces the document's \"config\".\n\
  - --diagnostics wraps the layout as {\"layout\", \"diagnostics\"}.\n\
  - Set STRATA_LOG (e.g. STRATA_LOG=debug) to log pass summaries to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => {}
            "--pretty" => args.pretty = true,
            "--diagnostics" => args.diagnostics = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" if args.input.is_none() => args.input = Some("-".to_string()),
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn build_graph(doc: &GraphDocument) -> Result<DirectedGraph, CliError> {
    let mut g = DirectedGraph::new();
    for spec in &doc.nodes {
        let n = g.add_node(spec.id.clone(), spec.width, spec.height)?;
        if let Some(node) = g.node_mut(n) {
            node.weight = spec.weight;
            node.set_padding(spec.padding)?;
        }
    }

    let lookup = |g: &DirectedGraph, id: &str| {
        g.node_by_name(id).ok_or_else(|| GraphError::UnknownNode {
            node: id.to_string(),
        })
    };
    for spec in &doc.edges {
        let source = lookup(&g, &spec.source)?;
        let target = lookup(&g, &spec.target)?;
        g.add_weighted_edge(source, target, spec.weight)?;
    }
    Ok(g)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STRATA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let doc: GraphDocument = serde_json::from_str(&text)?;

    let config = match args.config.as_deref() {
        Some(path) => LayoutConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => doc.config.clone().unwrap_or_default(),
    };

    let mut g = build_graph(&doc)?;
    tracing::debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        "graph loaded"
    );
    let diagnostics = strata::layout(&mut g, &config)?;
    let layout = Layout::from_graph(&g);

    if args.diagnostics {
        write_json(
            &LayoutOut {
                layout: &layout,
                diagnostics: &diagnostics,
            },
            args.pretty,
        )
    } else {
        write_json(&layout, args.pretty)
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing();
    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
