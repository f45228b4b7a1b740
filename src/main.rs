use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use steply_workflow::config::{ClipboardBackend, Config};
use steply_workflow::id_policy::IdPolicy;
use steply_workflow::logging::init_logging;
use steply_workflow::runtime::clipboard::{Clipboard, MemoryClipboard, Osc52Clipboard};
use steply_workflow::runtime::script::load_script;
use steply_workflow::runtime::{Mode, Runtime};
use steply_workflow::state::AppState;
use steply_workflow::step_list::StepList;
use steply_workflow::{Error, Result};

#[derive(Parser)]
#[command(
    name = "steply-workflow",
    version,
    about = "Assemble workflow steps and generate their JSON"
)]
struct Cli {
    /// YAML config file (defaults to ./steply-workflow.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Edit steps interactively, one command per line
    Edit {
        /// Start from previously generated JSON
        #[arg(long)]
        from: Option<PathBuf>,
        #[arg(long)]
        no_color: bool,
    },
    /// Apply a YAML command script and print the resulting JSON
    Run {
        script: PathBuf,
        /// Start from previously generated JSON
        #[arg(long)]
        from: Option<PathBuf>,
        /// Write the JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also copy the JSON to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config, cli.debug)?;
    tracing::debug!(?config, "config loaded");

    match cli.command.unwrap_or(CliCommand::Edit {
        from: None,
        no_color: false,
    }) {
        CliCommand::Edit { from, no_color } => edit(&config, from.as_deref(), no_color),
        CliCommand::Run {
            script,
            from,
            out,
            copy,
        } => run_script(&config, &script, from.as_deref(), out.as_deref(), copy),
    }
}

fn edit(config: &Config, from: Option<&Path>, no_color: bool) -> Result<()> {
    let steps = initial_steps(from, config.id_policy)?;
    let stdout = io::stdout();
    let color = config.color && !no_color && stdout.is_terminal();
    let prompt = io::stdin().is_terminal();

    let mut runtime = Runtime::new(
        AppState::new(steps),
        stdout.lock(),
        clipboard(config),
        Mode::Interactive,
    )
    .with_color(color)
    .with_prompt(prompt);
    runtime.run_lines(io::stdin().lock())?;
    Ok(())
}

fn run_script(
    config: &Config,
    script: &Path,
    from: Option<&Path>,
    out: Option<&Path>,
    copy: bool,
) -> Result<()> {
    let commands = load_script(script)?;
    let steps = initial_steps(from, config.id_policy)?;

    let mut runtime = Runtime::new(
        AppState::new(steps),
        io::sink(),
        clipboard(config),
        Mode::Batch,
    );
    runtime.run_script(commands)?;
    let json = runtime.finish_script(copy)?;
    match out {
        Some(path) => {
            fs::write(path, format!("{json}\n")).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "json written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}

fn initial_steps(from: Option<&Path>, policy: IdPolicy) -> Result<StepList> {
    let Some(path) = from else {
        return Ok(StepList::with_policy(policy));
    };
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let steps = StepList::from_json(&text, policy).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = steps.len(), "steps loaded");
    Ok(steps)
}

fn clipboard(config: &Config) -> Box<dyn Clipboard> {
    match config.clipboard {
        ClipboardBackend::Osc52 => Box::new(Osc52Clipboard::stderr()),
        ClipboardBackend::None => Box::new(MemoryClipboard::new()),
    }
}
