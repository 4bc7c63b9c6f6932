use std::path::{Path, PathBuf};
use std::sync::Arc;

use medifusion_client::client::{AnalysisClient, parse_response};
use medifusion_client::form::UploadForm;
use medifusion_client::orchestrate::{Dispatch, UploadOrchestrator, dispatch_view, interpret};
use medifusion_core::models::payload::{Modality, SelectedFile};
use medifusion_core::models::view::display_id;
use medifusion_export::area::ResultsArea;
use medifusion_export::preview::{PreviewPane, preview_selection};
use medifusion_export::render::ResultRenderer;
use medifusion_export::report::save_report;

use crate::cli::{
    AnalyzeArgs, Cli, Commands, ConfigCommand, ConfigSetArgs, OutputArgs, PreviewArgs, RenderArgs,
};
use crate::config::{self, MediFusionConfig};
use crate::page::PageArea;

pub const RESULTS_PAGE: &str = "medifusion_results.html";
pub const PREVIEW_PAGE: &str = "medifusion_preview.html";

pub async fn run(cli: Cli) -> eyre::Result<()> {
    match cli.command {
        Commands::Analyze(args) => {
            let config = config::load_config()?;
            let page = analyze(args, &config).await?;
            println!("results written to {}", page.display());
        }
        Commands::Render(args) => {
            let config = config::load_config()?;
            let page = render(args, &config)?;
            println!("results written to {}", page.display());
        }
        Commands::Preview(args) => {
            let config = config::load_config()?;
            let page = preview(args, &config).await?;
            println!("previews written to {}", page.display());
        }
        Commands::Config(args) => match args.command {
            ConfigCommand::Show => {
                let config = config::load_config()?;
                let path = config::config_dir()?.join("config.json");
                let info = config::config_info(&config, &path);
                println!("{}", serde_json::to_string_pretty(&info)?);
            }
            ConfigCommand::Set(args) => {
                let mut config = config::load_config()?;
                apply_config_changes(&mut config, args);
                let path = config::save_config(&config)?;
                println!("config saved to {}", path.display());
            }
        },
    }
    Ok(())
}

pub fn upload_form(args: &AnalyzeArgs) -> UploadForm {
    let mut form = UploadForm::new();
    for (modality, paths) in [
        (Modality::Structured, &args.structured),
        (Modality::Genomics, &args.genomics),
        (Modality::Pathology, &args.pathology),
        (Modality::Mri, &args.mri),
    ] {
        form.select(modality, paths.iter().map(SelectedFile::from_path));
    }
    form
}

/// Submit the selected files and write the results page. Fails when the
/// page ends on an error card.
pub async fn analyze(args: AnalyzeArgs, config: &MediFusionConfig) -> eyre::Result<PathBuf> {
    let endpoint = args.endpoint.clone().unwrap_or_else(|| config.endpoint.clone());
    let timeout = args
        .timeout
        .map(std::time::Duration::from_secs)
        .or_else(|| config.request_timeout());

    let form = upload_form(&args);
    let previews = preview_selection(form.selected(Modality::Mri)).await;
    let out = page_path(args.output.out.clone(), config, RESULTS_PAGE);

    let renderer = Arc::new(ResultRenderer::new()?);
    let orchestrator = UploadOrchestrator::new(
        AnalysisClient::new(endpoint, timeout)?,
        Arc::clone(&renderer),
        PageArea::new(&out, previews, renderer),
    );
    let dispatch = orchestrator.submit(&form).await?;
    finish(&dispatch, &args.output, &out)
}

/// Render a saved response through the same routing as a live one.
pub fn render(args: RenderArgs, config: &MediFusionConfig) -> eyre::Result<PathBuf> {
    let body = std::fs::read_to_string(&args.response)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", args.response.display()))?;
    let dispatch = interpret(parse_response(&body));

    let out = page_path(args.output.out.clone(), config, RESULTS_PAGE);
    let renderer = Arc::new(ResultRenderer::new()?);
    let area = PageArea::new(&out, PreviewPane::default(), Arc::clone(&renderer));
    area.replace(renderer.present(dispatch_view(&renderer, &dispatch))?)?;

    finish(&dispatch, &args.output, &out)
}

pub async fn preview(args: PreviewArgs, config: &MediFusionConfig) -> eyre::Result<PathBuf> {
    let files: Vec<SelectedFile> = args.mri.iter().map(SelectedFile::from_path).collect();
    let previews = preview_selection(&files).await;
    tracing::info!(selected = files.len(), previews = previews.len(), "previews ready");

    let out = page_path(args.out, config, PREVIEW_PAGE);
    PageArea::new(&out, previews, Arc::new(ResultRenderer::new()?)).write("")?;
    Ok(out)
}

/// Save every patient's report into `dir`, named by display id.
pub fn export_reports(dispatch: &Dispatch, dir: &Path) -> eyre::Result<Vec<PathBuf>> {
    let Dispatch::Results(results) = dispatch else {
        return Ok(Vec::new());
    };
    results
        .iter()
        .enumerate()
        .map(|(index, result)| -> eyre::Result<PathBuf> {
            Ok(save_report(dir, &display_id(index, result), result)?)
        })
        .collect()
}

pub fn apply_config_changes(config: &mut MediFusionConfig, args: ConfigSetArgs) {
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = Some(timeout);
    }
    if args.clear_timeout {
        config.request_timeout_secs = None;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = Some(dir);
    }
}

fn finish(dispatch: &Dispatch, output: &OutputArgs, page: &Path) -> eyre::Result<PathBuf> {
    if let Some(dir) = &output.export_dir {
        let saved = export_reports(dispatch, dir)?;
        tracing::info!(reports = saved.len(), dir = %dir.display(), "reports exported");
    }
    if let Dispatch::Error(message) = dispatch {
        return Err(eyre::eyre!(
            "analysis failed: {message} (see {})",
            page.display()
        ));
    }
    Ok(page.to_path_buf())
}

fn page_path(explicit: Option<PathBuf>, config: &MediFusionConfig, default_name: &str) -> PathBuf {
    explicit.unwrap_or_else(|| config.output_dir().join(default_name))
}
