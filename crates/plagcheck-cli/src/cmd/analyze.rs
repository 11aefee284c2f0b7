use super::{CliError, CliResult};
use crate::reports;
use clap::{ArgMatches, Args, ValueEnum};
use plagcheck_core::config::DetectorConfig;
use plagcheck_core::detector::Detector;
use plagcheck_core::intake;
use plagcheck_core::view::sources::source_cards;
use plagcheck_core::view::{AppState, InputTab};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Html,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Document to analyze. Read from stdin when neither this nor --text is given.
    pub file: Option<PathBuf>,

    #[arg(short, long)]
    pub text: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// JSON file with detector settings; typed flags override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub detector: DetectorConfig,
}

enum Input {
    Text(String),
    Document { name: String, content: String },
}

pub fn run(args: &AnalyzeArgs, matches: Option<&ArgMatches>) -> CliResult<()> {
    let config = resolve_config(args, matches)?;
    let allowed = config.get_allowed_extensions();
    let detector = Detector::new(config);

    let mut state = AppState::new(detector.config());
    state.on_load(&detector)?;

    match read_input(args, &allowed)? {
        Input::Text(text) => state.set_text(text),
        Input::Document { name, content } => {
            state.switch_tab(InputTab::Upload);
            state.accept_file(&name, content.as_bytes())?;
        }
    }

    let rendered = state.analyze(&detector)?;
    let result = &rendered.result;

    match args.format {
        OutputFormat::Table => {
            reports::print_verdict_report(result);
            reports::print_sources_report(&source_cards(result));
            reports::print_statistics_report(result);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Html => {
            println!("{}", rendered.progress);
            println!("{}", rendered.sources);
            println!("{}", rendered.statistics);
        }
    }
    Ok(())
}

fn resolve_config(args: &AnalyzeArgs, matches: Option<&ArgMatches>) -> CliResult<DetectorConfig> {
    let Some(path) = &args.config else {
        return Ok(args.detector.clone());
    };

    info!("⚙️  Loading detector config from {:?}", path);
    let mut config = DetectorConfig::load_from_file(path).map_err(CliError::Input)?;
    if let Some(matches) = matches {
        config.merge_from_cli(&args.detector, matches);
    }
    Ok(config)
}

/// `--text` wins over FILE, FILE over stdin.
fn read_input(args: &AnalyzeArgs, allowed: &[String]) -> CliResult<Input> {
    if let Some(text) = &args.text {
        return Ok(Input::Text(text.clone()));
    }

    if let Some(path) = &args.file {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CliError::Input(format!("Not a file: {}", path.display())))?
            .to_string();
        let content = intake::read_document(path, allowed)?;
        return Ok(Input::Document { name, content });
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::Input(
            "No input: pass --text, a FILE, or pipe text on stdin".to_string(),
        ));
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(Input::Text(text))
}
