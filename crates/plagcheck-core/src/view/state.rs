use super::render::{render_result, RenderedResult};
use super::UiError;
use crate::config::DetectorConfig;
use crate::detector::AnalysisService;
use crate::intake;
use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{error, info};

/// Mutually exclusive input views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InputTab {
    #[default]
    Text,
    Upload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub tab: InputTab,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    pub name: String,
    pub content: String,
}

/// Everything the page used to keep in globals and DOM nodes.
#[derive(Debug, Clone, Serialize)]
pub struct AppState {
    active_tab: InputTab,
    text_input: String,
    file: Option<UploadedFile>,
    analysis_enabled: bool,
    #[serde(skip)]
    allowed_extensions: Vec<String>,
}

impl AppState {
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            active_tab: InputTab::default(),
            text_input: String::new(),
            file: None,
            analysis_enabled: false,
            allowed_extensions: config.get_allowed_extensions(),
        }
    }

    /// Page load: the analyze actions only become available once the
    /// service reports ready.
    pub fn on_load<S: AnalysisService + ?Sized>(&mut self, service: &S) -> Result<(), UiError> {
        match service.initialize() {
            Ok(()) => {
                info!("Detector initialized successfully");
                self.analysis_enabled = true;
                Ok(())
            }
            Err(e) => {
                error!("Failed to initialize detector: {}", e);
                self.analysis_enabled = false;
                Err(UiError::InitFailed(e))
            }
        }
    }

    pub fn analysis_enabled(&self) -> bool {
        self.analysis_enabled
    }

    pub fn active_tab(&self) -> InputTab {
        self.active_tab
    }

    pub fn switch_tab(&mut self, tab: InputTab) {
        self.active_tab = tab;
    }

    pub fn sections(&self) -> Vec<Section> {
        InputTab::iter()
            .map(|tab| Section {
                tab,
                active: tab == self.active_tab,
            })
            .collect()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text_input = text.into();
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    /// Rejected files leave the previous upload in place.
    pub fn accept_file(&mut self, name: &str, bytes: &[u8]) -> Result<&UploadedFile, UiError> {
        if !intake::is_allowed(name, &self.allowed_extensions) {
            return Err(UiError::InvalidFile(intake::describe_allowed(
                &self.allowed_extensions,
            )));
        }

        info!("Loaded file '{}' ({} bytes)", name, bytes.len());
        Ok(&*self.file.insert(UploadedFile {
            name: name.to_string(),
            content: intake::decode_text(bytes),
        }))
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    /// Typed text wins; the uploaded content is the fallback.
    pub fn active_input(&self) -> &str {
        if !self.text_input.is_empty() {
            return &self.text_input;
        }
        self.file.as_ref().map(|f| f.content.as_str()).unwrap_or("")
    }

    pub fn analyze<S: AnalysisService + ?Sized>(
        &self,
        service: &S,
    ) -> Result<RenderedResult, UiError> {
        if !self.analysis_enabled || !service.is_ready() {
            return Err(UiError::NotReady);
        }

        let text = self.active_input();
        if text.trim().is_empty() {
            return Err(UiError::EmptyInput);
        }

        let result = service.analyze(text).map_err(|e| {
            error!("Analysis failed: {}", e);
            UiError::AnalysisFailed(e)
        })?;

        Ok(render_result(&result))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&DetectorConfig::default())
    }
}
