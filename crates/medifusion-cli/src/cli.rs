use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "medifusion", version, about = "Upload multi-modal patient data and render the analysis")]
pub struct Cli {
    #[arg(long, global = true, default_value_t = false, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Submit files to the analysis service and write the results page.
    Analyze(AnalyzeArgs),
    /// Render a saved analysis response without contacting the service.
    Render(RenderArgs),
    /// Write a page with previews of the selected imaging files.
    Preview(PreviewArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[arg(long, num_args = 1.., help = "Structured records (CSV), repeatable")]
    pub structured: Vec<PathBuf>,

    #[arg(long, num_args = 1.., help = "Genomics reports, repeatable")]
    pub genomics: Vec<PathBuf>,

    #[arg(long, num_args = 1.., help = "Pathology reports, repeatable")]
    pub pathology: Vec<PathBuf>,

    #[arg(long, num_args = 1.., help = "MRI / imaging files, repeatable")]
    pub mri: Vec<PathBuf>,

    #[arg(long, help = "Analysis endpoint (overrides config)")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Request timeout in seconds (overrides config; default none)")]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[arg(long, help = "Saved JSON response from the analysis service")]
    pub response: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[arg(long, num_args = 1..)]
    pub mri: Vec<PathBuf>,

    #[arg(long, help = "Page to write (default: <output_dir>/medifusion_preview.html)")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(long, help = "Page to write (default: <output_dir>/medifusion_results.html)")]
    pub out: Option<PathBuf>,

    #[arg(long, help = "Also save every patient's JSON report into this directory")]
    pub export_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    Set(ConfigSetArgs),
}

#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, default_value_t = false, conflicts_with = "timeout")]
    pub clear_timeout: bool,

    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}
