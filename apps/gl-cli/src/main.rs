use clap::{Parser, Subcommand};
use gl_core::Environment;
use gl_factory::{extractor, opener, orchestrator, runner::Interpreter, LauncherConfig};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "Power BI Governance Launcher")]
#[command(version)]
#[command(about = "Unpacks and runs the Power BI governance script from a terminal")]
struct Cli {
    /// Workspace folder (overrides GL_BASE_DIR)
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// PowerShell executable (overrides GL_INTERPRETER)
    #[arg(long, global = true)]
    interpreter: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Writes the bundled script, model and config into the workspace
    Extract,

    /// Extracts, then runs the script for one environment
    Run {
        /// Name (e.g. USGov) or picker index 0-5; prompts when omitted
        #[arg(short, long)]
        env: Option<Environment>,

        /// Open the model afterwards if the run succeeded
        #[arg(long, default_value_t = false)]
        open: bool,
    },

    /// Opens the produced model with the system's default handler
    Open,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gl_cli=info,gl_factory=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli);

    let result = match cli.command {
        // [1] EXTRACT
        Commands::Extract => extractor::run_cli(&config).map_err(|e| ("Extraction", e)),

        // [2] RUN
        Commands::Run { env, open } => {
            let args = orchestrator::RunArgs { environment: env };
            orchestrator::run_cli(config.clone(), args)
                .map_err(|e| ("Run", e))
                .and_then(|()| {
                    if open {
                        opener::run_cli(&config).map_err(|e| ("Open", e))
                    } else {
                        Ok(())
                    }
                })
        }

        // [3] OPEN
        Commands::Open => opener::run_cli(&config).map_err(|e| ("Open", e)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err((stage, e)) => {
            eprintln!("❌ {} Error: {:#}", stage, e);
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(cli: &Cli) -> LauncherConfig {
    let mut config = LauncherConfig::from_env();
    if let Some(dir) = &cli.base_dir {
        config = config.with_base_dir(dir);
    }
    if let Some(program) = &cli.interpreter {
        config = config.with_interpreter(Interpreter::powershell(program));
    }
    tracing::debug!(?config, "command line overrides applied");
    config
}
