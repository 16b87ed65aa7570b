use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{arg, Arg, ArgAction, ArgMatches, Command};
use clique_graph::{OutputFormat, Session};
use env_logger::Builder;
use log::LevelFilter;

fn cli() -> Command {
    Command::new("clique-graph")
        .about("Run a graph command script: Add, Find, Follow, Clique, Compact")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(arg!(<INPUT> "command file, `-` for stdin"))
        .arg(
            Arg::new("JSON")
                .long("json")
                .help("print one JSON object per result")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("VERBOSE")
                .long("verbose")
                .short('v')
                .help("enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

fn init_logger(matches: &ArgMatches) {
    let level = if matches.get_flag("VERBOSE") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logger(&matches);

    let input = matches
        .get_one::<String>("INPUT")
        .context("missing input file")?;
    let format = if matches.get_flag("JSON") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let mut session = Session::new();
    let stdout = io::stdout();
    let out = stdout.lock();

    let stats = if input == "-" {
        session.run(io::stdin().lock(), out, format)?
    } else {
        let file = File::open(input).with_context(|| format!("failed to open `{}`", input))?;
        session.run(BufReader::new(file), out, format)?
    };

    log::info!(
        "Executed {} commands ({} rejected, {} failed); graph has {} nodes",
        stats.executed,
        stats.rejected,
        stats.failed,
        session.graph().len()
    );
    Ok(())
}
