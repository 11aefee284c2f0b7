use crate::analyzer::{AnalysisResult, TextAnalyzer};
use crate::config::DetectorConfig;
use crate::error::{CheckError, CheckResult};
use fastrand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::info;

/// Entry point for callers: an analyzer behind a readiness flag.
///
/// `analyze` refuses to run until `initialize` has been called. The random
/// stream is shared behind a mutex so one detector can serve many requests.
pub struct Detector {
    analyzer: TextAnalyzer,
    initialized: AtomicBool,
    rng: Mutex<Rng>,
}

impl Detector {
    pub fn new(config: DetectorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };

        Self {
            analyzer: TextAnalyzer::new(config),
            initialized: AtomicBool::new(false),
            rng: Mutex::new(rng),
        }
    }

    /// Builds and initializes in one step.
    pub fn ready(config: DetectorConfig) -> CheckResult<Self> {
        let detector = Self::new(config);
        detector.initialize()?;
        Ok(detector)
    }

    /// No model is loaded; the detector runs in simulation mode.
    pub fn initialize(&self) -> CheckResult<()> {
        self.initialized.store(true, Ordering::Release);
        info!("Detector initialized in simulation mode");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &DetectorConfig {
        self.analyzer.config()
    }

    pub fn analyze(&self, text: &str) -> CheckResult<AnalysisResult> {
        if !self.is_initialized() {
            return Err(CheckError::NotInitialized);
        }
        if text.trim().is_empty() {
            return Err(CheckError::EmptyInput);
        }

        // A panic elsewhere cannot leave the generator in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.analyzer.analyze(text, &mut rng)
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

/// Seam between the presentation layer and whatever produces results.
pub trait AnalysisService {
    fn initialize(&self) -> CheckResult<()>;
    fn is_ready(&self) -> bool;
    fn analyze(&self, text: &str) -> CheckResult<AnalysisResult>;
}

impl AnalysisService for Detector {
    fn initialize(&self) -> CheckResult<()> {
        Detector::initialize(self)
    }

    fn is_ready(&self) -> bool {
        self.is_initialized()
    }

    fn analyze(&self, text: &str) -> CheckResult<AnalysisResult> {
        Detector::analyze(self, text)
    }
}
