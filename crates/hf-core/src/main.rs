//! hostfetch — one-shot labeled report of host attributes.

use clap::{Args, Parser, Subcommand};
use hf_common::{AttributeId, Error, OutputFormat};
use hf_config::{load_config, Config, LoadedConfig};
use hf_core::{render, Prober, Renderer};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

/// hostfetch — best-effort snapshot of the local machine
#[derive(Parser)]
#[command(name = "hostfetch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to the configuration file
    #[arg(long, global = true, env = "HOSTFETCH_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    format: OutputFormat,

    /// Comma-separated subset of attributes to report
    #[arg(long, global = true, value_delimiter = ',')]
    attrs: Option<Vec<AttributeId>>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration and report where it was loaded from
    Check,

    /// List known attribute identifiers
    List,

    /// Print version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    hf_core::logging::init(cli.global.verbose, cli.global.quiet);

    let result = match cli.command {
        Some(Commands::Check) => run_check(&cli.global),
        Some(Commands::List) => run_list(),
        Some(Commands::Version) => {
            println!("hostfetch {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => run_report(&cli.global),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run_report(opts: &GlobalOpts) -> hf_common::Result<()> {
    // An unreadable or invalid config file degrades to the built-in
    // defaults so the report still renders; `check` is the strict path.
    let config = match load_config(opts.config.as_deref()) {
        Ok(loaded) => loaded.config,
        Err(err) => {
            warn!("{err}; using built-in defaults");
            Config::default()
        }
    };

    let selected: Vec<AttributeId> = match &opts.attrs {
        Some(ids) => ids.clone(),
        None => config.report.attributes.clone(),
    };

    let prober = Prober::new(&config);
    let report = prober.resolve_report(&selected);

    match opts.format {
        OutputFormat::Text => {
            let color = !opts.no_color && std::io::stdout().is_terminal();
            let renderer = Renderer::new(&config, color);
            let stdout = std::io::stdout();
            let stderr = std::io::stderr();
            renderer.render_text(&report, &mut stdout.lock(), &mut stderr.lock())?;
        }
        OutputFormat::Json => {
            let snapshot = render::snapshot(&config, &report);
            serde_json::to_writer_pretty(std::io::stdout().lock(), &snapshot)?;
            println!();
        }
    }

    Ok(())
}

fn run_check(opts: &GlobalOpts) -> hf_common::Result<()> {
    match load_config(opts.config.as_deref()) {
        Ok(LoadedConfig { path, source, .. }) => {
            match path {
                Some(path) => println!("config ok: {} ({source})", path.display()),
                None => println!("config ok: built-in defaults"),
            }
            Ok(())
        }
        Err(err) => Err(Error::Config(err.to_string())),
    }
}

fn run_list() -> hf_common::Result<()> {
    for id in AttributeId::ALL {
        println!("{id}");
    }
    Ok(())
}
