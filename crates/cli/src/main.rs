//! `agent-wizard` command line.
//!
//! Without a subcommand, launches the TUI wizard.

mod listing;
mod logging;

use aw_protocol::profile_models::VoiceGender;
use aw_protocol::step_models::WizardVariant;
use aw_tui::LaunchOptions;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agent-wizard", version, about = "Build an AI agent profile step by step")]
struct Cli {
    /// Write logs to this file. Level comes from RUST_LOG.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Directory containing `.agent-wizard/`.
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the wizard (default).
    Run(RunArgs),
    /// List the template catalog.
    Templates {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List available voices.
    Voices {
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
    },
}

#[derive(Args, Debug, Default, Clone)]
struct RunArgs {
    /// Step sequence: classic, compact or enhanced.
    #[arg(long)]
    variant: Option<WizardVariant>,

    /// Template id that seeds the business fields.
    #[arg(long, value_name = "ID")]
    template: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum GenderArg {
    Female,
    Male,
}

impl From<GenderArg> for VoiceGender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Female => VoiceGender::Female,
            GenderArg::Male => VoiceGender::Male,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let _log_guard = match &cli.log_file {
        Some(path) => Some(logging::init(path)?),
        None => None,
    };

    match cli.command {
        Some(Command::Templates { json }) => {
            let catalog = listing::load_catalog(&cli.root).await?;
            listing::print_templates(&catalog, json)?;
        }
        Some(Command::Voices { gender }) => {
            let genders = match gender {
                Some(g) => vec![VoiceGender::from(g)],
                None => VoiceGender::ALL.to_vec(),
            };
            listing::print_voices(&genders);
        }
        Some(Command::Run(args)) => launch(cli.root, args).await?,
        None => launch(cli.root, cli.run).await?,
    }

    Ok(())
}

async fn launch(root: PathBuf, args: RunArgs) -> color_eyre::Result<()> {
    tracing::debug!(?args, root = %root.display(), "launching wizard");
    aw_tui::run_app(LaunchOptions {
        root,
        variant: args.variant,
        template: args.template,
    })
    .await
    .map_err(|e| color_eyre::eyre::eyre!("{e:#}"))
}
