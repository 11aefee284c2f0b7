use super::{CliError, CliResult};
use crate::reports;
use clap::Args;
use plagcheck_core::checker::CheckerResponse;
use plagcheck_core::config::DetectorConfig;
use plagcheck_core::intake;
use plagcheck_core::view::render::render_checker_response;
use reqwest::multipart::{Form, Part};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct UploadArgs {
    pub file: PathBuf,

    /// Base URL of the checker service.
    #[arg(short, long, default_value = "http://127.0.0.1:5000")]
    pub server: String,
}

pub fn run(args: &UploadArgs) -> CliResult<()> {
    let name = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::Input(format!("Not a file: {}", args.file.display())))?
        .to_string();

    // Same allow-list the service enforces; refuse before touching the file.
    let allowed = DetectorConfig::default().get_allowed_extensions();
    intake::check_extension(&name, &allowed)?;
    let bytes = std::fs::read(&args.file)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let response = runtime.block_on(post_document(&args.server, name, bytes))?;

    if let Some(message) = response.message.as_deref() {
        if !response.is_success() {
            error!("Server said: {}", message);
        }
    }

    let rendered = render_checker_response(&response)?;
    reports::print_upload_report(&response, &rendered);
    Ok(())
}

/// Error replies carry the same body shape, so the status code is not checked.
async fn post_document(
    server: &str,
    name: String,
    bytes: Vec<u8>,
) -> Result<CheckerResponse, reqwest::Error> {
    let url = format!("{}/checker", server.trim_end_matches('/'));
    info!("📤 Uploading '{}' ({} bytes) to {}", name, bytes.len(), url);

    let form = Form::new().part("file", Part::bytes(bytes).file_name(name));
    reqwest::Client::new()
        .post(url)
        .multipart(form)
        .send()
        .await?
        .json::<CheckerResponse>()
        .await
}
