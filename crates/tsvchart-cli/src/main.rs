use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tsvchart::{Chart, ChartType};

#[derive(Parser, Debug)]
#[command(
    name = "tsvchart-cli",
    about = "Convert TSV chart code blocks to JSON and back",
    version
)]
struct Args {
    /// Encode chart JSON to the TSV text form (default parses TSV to JSON)
    #[arg(short, long)]
    encode: bool,

    /// Reject ragged rows and option lines without a value
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Pretty-print JSON on output (when parsing)
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Code block language tag, e.g. `chart:line`; adds `chartType` to the output
    #[arg(short, long)]
    language: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    chart_type: Option<ChartType>,
    #[serde(flatten)]
    chart: &'a Chart,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose, args.quiet);

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }
    debug!(bytes = buf.len(), "read input");

    if args.encode {
        let chart: Chart = serde_json::from_str(&buf)?;
        let out = tsvchart::encode_to_string(&chart)?;
        print!("{}", out);
        return Ok(());
    }

    let chart_type = match &args.language {
        Some(tag) => match ChartType::from_language(tag) {
            Some(t) => Some(t),
            None => bail!("{}: no chart type for language '{}'", tsvchart::FALLBACK_MESSAGE, tag),
        },
        None => None,
    };

    let options = tsvchart::Options {
        strict: args.strict,
    };
    let chart = tsvchart::parse_with_options(&buf, &options)?;
    info!(
        series = chart.data.series.len(),
        categories = chart.data.categories.len(),
        option_groups = chart.options.len(),
        "parsed chart"
    );

    let output = Output {
        chart_type,
        chart: &chart,
    };
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string(&output)?);
    }

    Ok(())
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
