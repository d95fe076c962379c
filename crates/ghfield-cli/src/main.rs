#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Context;
use clap::Parser;
use ghfield_core::{latest_comment_with_marker, parse_document, Extracted, Selector, BUILD_MARKER};
use std::fs::File;
use std::io::{Read, Write};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "ghfield",
    version,
    about = "Extract fields from GitHub API JSON for CI scripts"
)]
struct Cli {
    /// JSON input file ("-" or unset reads stdin)
    #[arg(long, short, global = true, env = "GHFIELD_INPUT")]
    input: Option<String>,

    /// Log filter when RUST_LOG is unset (logs go to stderr)
    #[arg(long, global = true, env = "GHFIELD_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "GHFIELD_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Pull request head commit SHA (head.sha)
    HeadSha,
    /// Pull request base commit SHA (base.sha)
    BaseSha,
    /// Pull request base branch (base.ref)
    BaseRef,
    /// Pull request state (state)
    State,
    /// Commit message (commit.message)
    CommitMessage,
    /// Commit author name (commit.author.name)
    CommitAuthor,
    /// Committer date as Unix epoch seconds (commit.committer.date)
    CommitDate,
    /// Body of the newest build comment in an issue comment list
    LatestBuildComment(CommentArgs),
}

#[derive(clap::Args)]
struct CommentArgs {
    /// Substring that marks a build comment
    #[arg(long, env = "GHFIELD_BUILD_MARKER", default_value = BUILD_MARKER)]
    marker: String,
}

impl Commands {
    fn selector(&self) -> Selector {
        match self {
            Commands::HeadSha => Selector::HeadSha,
            Commands::BaseSha => Selector::BaseSha,
            Commands::BaseRef => Selector::BaseRef,
            Commands::State => Selector::State,
            Commands::CommitMessage => Selector::CommitMessage,
            Commands::CommitAuthor => Selector::CommitAuthor,
            Commands::CommitDate => Selector::CommitDate,
            Commands::LatestBuildComment(_) => Selector::LatestBuildComment,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json);
    let code = run_cli(&cli);
    std::process::exit(code);
}

/// Install the stderr subscriber; RUST_LOG wins over `--log-level`
fn init_tracing(level: &str, json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .ok();
    }
}

/// Filter empty string from Option (env vars may produce "" for empty values)
fn clean_opt(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn open_input(path: Option<&str>) -> anyhow::Result<Box<dyn Read>> {
    match path {
        None | Some("-") => Ok(Box::new(std::io::stdin().lock())),
        Some(p) => {
            let file = File::open(p).with_context(|| format!("cannot open input {p}"))?;
            Ok(Box::new(file))
        }
    }
}

fn run_cli(cli: &Cli) -> i32 {
    let selector = cli.command.selector();
    tracing::debug!(%selector, input = ?clean_opt(&cli.input), "starting");

    let result = open_input(clean_opt(&cli.input)).and_then(|reader| {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        run(&cli.command, reader, &mut out)
    });

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    }
}

/// Extract the selected field and write it as a single line
///
/// Nothing reaches `out` unless extraction succeeded.
fn run<R: Read, W: Write>(command: &Commands, reader: R, out: &mut W) -> anyhow::Result<()> {
    let doc = parse_document(reader)?;
    let value = match command {
        Commands::LatestBuildComment(args) => latest_comment_with_marker(&doc, &args.marker)?
            .map_or(Extracted::Empty, Extracted::Text),
        other => other.selector().extract(&doc)?,
    };

    writeln!(out, "{value}").context("failed to write output")?;
    out.flush().context("failed to write output")?;
    Ok(())
}
