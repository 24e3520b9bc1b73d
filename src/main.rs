use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use olex::config::CONFIG_FILE;
use olex::{Compiler, Config, Result};

#[derive(Parser)]
#[command(name = "olex", version)]
#[command(about = "Usage-pruned, attribute-driven utility CSS generator")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Project {
    /// Config file
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Content globs, replacing the configured ones
    #[arg(long = "content")]
    content: Vec<String>,
}

impl Project {
    fn load(&self) -> Result<Config> {
        let mut config = Config::load(&self.config)?;
        if !self.content.is_empty() {
            config.content = self.content.clone();
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a stylesheet
    Build {
        /// Input stylesheet
        input: PathBuf,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,

        #[command(flatten)]
        project: Project,
    },

    /// Compile a stylesheet, then rebuild on every change
    Watch {
        /// Input stylesheet
        input: PathBuf,

        /// Output file
        #[arg(short)]
        o: PathBuf,

        #[command(flatten)]
        project: Project,
    },

    /// Print the usage index of the content files as JSON
    Scan {
        #[command(flatten)]
        project: Project,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("OLEX_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn build(input: &Path, output: Option<&Path>, project: &Project) -> Result<()> {
    let compiler = Compiler::new(project.load()?);
    match output {
        Some(output) => compiler.build(input, output).await,
        None => {
            print!("{}", compiler.compile_file(input).await?);
            Ok(())
        }
    }
}

async fn scan(project: &Project) -> Result<()> {
    let compiler = Compiler::new(project.load()?);
    let index = compiler.cache().load().await?;
    println!("{}", serde_json::to_string_pretty(&*index)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build { input, o, project } => build(&input, o.as_deref(), &project).await,
        Commands::Watch { input, o, project } => {
            let compiler = Compiler::new(project.load()?);
            olex::watch::watch(&compiler, &input, &o).await
        }
        Commands::Scan { project } => scan(&project).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
