use clap::{Parser, ValueEnum};
use root_anchors::config::{AnchorConfig, parse_evaluation_time};
use root_anchors::report::{AnchorReport, RecordKind};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Print the DNSSEC root trust anchors valid at a point in time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// root-anchors.xml to read instead of the embedded IANA set
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Evaluation time (RFC 3339), defaults to now
    #[arg(short, long)]
    at: Option<String>,

    /// Record kinds to print
    #[arg(short, long, value_enum, default_value = "all")]
    kind: RecordKind,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    /// Zone file presentation format
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = AnchorConfig::from_env()?;
    if let Some(file) = args.file {
        config.anchors_file = Some(file);
    }
    if let Some(at) = &args.at {
        config.evaluation_time = Some(parse_evaluation_time(at)?);
    }
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = config.load_store()?;
    let now = config.evaluation_time();
    debug!("Evaluating trust anchors for zone {} at {}", store.zone(), now);

    let report = AnchorReport::build(&store, now, args.kind);
    match args.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
