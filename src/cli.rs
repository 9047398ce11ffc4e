// src/cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::contract::BackendContract;
use crate::core::{ConfigManager, FsOps, ServiceClient};
use crate::render::{markdown_to_html, markdown_to_text, render_result, wrap_document, OutputFormat};
use crate::theme::{Theme, ThemeStore};
use crate::utils::format_file_size;
use crate::workflow::AnalyzeSession;

#[derive(Parser)]
#[command(name = "resume-scanner")]
#[command(about = "See how well a resume matches a job description")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload a resume with a job description and show the analysis
    Analyze(AnalyzeArgs),
    /// Render a saved markdown analysis without contacting the backend
    Render {
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show or change the light/dark preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Resume file (PDF, DOCX or TXT)
    #[arg(long)]
    pub resume: PathBuf,
    /// Job description text
    #[arg(long, conflicts_with = "job_file", required_unless_present = "job_file")]
    pub job: Option<String>,
    /// Read the job description from a file
    #[arg(long)]
    pub job_file: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub contract: Option<BackendContract>,
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the result here instead of stdout. HTML output becomes a full page.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set {
        #[arg(value_enum)]
        theme: Theme,
    },
}

pub async fn handle_command(cli: Cli, config: ConfigManager) -> Result<()> {
    let themes = ThemeStore::new(&config.preferences_path);

    match cli.command {
        Command::Analyze(args) => analyze(args, &config, &themes).await,

        Command::Render {
            input,
            format,
            output,
        } => {
            let analysis = FsOps::read_file_safe(&input).await?;
            let rendered = match format {
                OutputFormat::Html => markdown_to_html(&analysis),
                OutputFormat::Text => markdown_to_text(&analysis),
            };
            emit(&rendered, format, output, &themes).await
        }

        Command::Theme { action } => {
            let theme = match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => themes.load().await,
                ThemeAction::Toggle => themes.toggle().await?,
                ThemeAction::Set { theme } => {
                    themes.save(theme).await?;
                    theme
                }
            };
            println!("Theme: {}", theme);
            Ok(())
        }
    }
}

async fn analyze(args: AnalyzeArgs, config: &ConfigManager, themes: &ThemeStore) -> Result<()> {
    let mut service = config.service.clone();
    if let Some(contract) = args.contract {
        service.contract = contract;
    }
    if let Some(base_url) = args.base_url {
        service.base_url = base_url;
    }

    let client = ServiceClient::new(&service)?;
    info!("Using {} contract at {}", service.contract, client.endpoint_url());

    let mut session = AnalyzeSession::new(service.contract, client);

    let state = session.select_path(&args.resume).await?;
    if let Some(err) = state.error() {
        match state.error_hint() {
            Some(hint) => anyhow::bail!("{} {}", err, hint),
            None => anyhow::bail!("{}", err),
        }
    }

    let job_text = match (args.job, args.job_file) {
        (Some(text), _) => text,
        (None, Some(path)) => FsOps::read_file_safe(&path).await?,
        (None, None) => anyhow::bail!("Provide --job or --job-file"),
    };
    session.set_job_text(job_text);

    if let Some(file) = session.state().selected_file() {
        println!(
            "📄 Analyzing {} ({})...",
            file.file_name,
            format_file_size(file.size())
        );
    }

    let state = session.submit().await;
    if let Some(err) = state.error() {
        anyhow::bail!("{}", err);
    }

    let result = state
        .result()
        .context("Analysis finished without a result")?;
    let rendered = render_result(result, args.format);

    emit(&rendered, args.format, args.output, themes).await
}

async fn emit(
    rendered: &str,
    format: OutputFormat,
    output: Option<PathBuf>,
    themes: &ThemeStore,
) -> Result<()> {
    let Some(path) = output else {
        println!("{}", rendered);
        return Ok(());
    };

    let content = match format {
        OutputFormat::Html => wrap_document("Resume Analysis", rendered, themes.load().await),
        OutputFormat::Text => format!("{}\n", rendered),
    };
    FsOps::write_file_safe(&path, &content).await?;
    println!("✓ Saved analysis to {}", path.display());
    Ok(())
}
