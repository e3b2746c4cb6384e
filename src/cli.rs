//! CLI definitions and entry point

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::debug;

use scratch::arith;
use scratch::config::Config;
use scratch::emit;
use scratch::output::{OutputMode, SpellResult, SumResult};

/// scratch - add two integers and spell out a greeting
#[derive(Parser, Debug)]
#[command(
    name = "scratch",
    version,
    about = "Add two integers and spell out a greeting",
    long_about = "With no subcommand, adds the configured operands (10 and 2 by default),\n\
                  discards the result, and prints \"hello\" one character per line."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this TOML file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands; without one the built-in program runs
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add two integers and print the result
    Add {
        /// First operand
        #[arg(allow_hyphen_values = true)]
        a: i32,

        /// Second operand
        #[arg(allow_hyphen_values = true)]
        b: i32,
    },

    /// Print text one character per line
    Spell {
        /// Text to spell (defaults to "hello")
        text: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Command::Add { a, b }) => {
            let sum = arith::checked_add(a, b)?;
            ignore_broken_pipe(SumResult { sum }.render(output_mode, &mut out))
        },
        Some(Command::Spell { text }) => {
            let text = text.as_deref().unwrap_or(emit::GREETING);
            ignore_broken_pipe(SpellResult::new(text).render(output_mode, &mut out))
        },
        Some(Command::Version) => {
            let res = if output_mode == OutputMode::Json {
                writeln!(out, "{}", serde_json::json!({ "version": scratch::VERSION }))
            } else {
                writeln!(out, "scratch v{}", scratch::VERSION)
            };
            ignore_broken_pipe(res)
        },
        None => {
            let config = Config::load_or_default(cli.config.as_deref())?;
            debug!("loaded config: {config:?}");
            run_default(config, &mut out)
        },
    }
}

/// The built-in program: add the operands, drop the result, spell the greeting
fn run_default(config: Config, out: &mut impl Write) -> anyhow::Result<()> {
    let sum = arith::add(config.operands.a, config.operands.b);
    debug!("{} + {} = {} (discarded)", sum.a, sum.b, sum.sum);

    ignore_broken_pipe(emit::emit_chars(emit::GREETING, out))
}

/// A reader closing our stdout early is not a failure
fn ignore_broken_pipe(res: io::Result<()>) -> anyhow::Result<()> {
    match res {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write to stdout"),
    }
}
