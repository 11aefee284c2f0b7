mod common;

use common::{seeded_detector, SAMPLE};
use plagcheck_core::analyzer::AnalysisResult;
use plagcheck_core::config::DetectorConfig;
use plagcheck_core::detector::{AnalysisService, Detector};
use plagcheck_core::error::{CheckError, CheckResult};
use plagcheck_core::view::sources::source_cards;
use plagcheck_core::view::{AppState, ConfidenceLevel, InputTab, UiError};
use proptest::prelude::*;
use std::io;

/// A service whose initialization always fails.
struct BrokenService;

impl AnalysisService for BrokenService {
    fn initialize(&self) -> CheckResult<()> {
        Err(CheckError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "model missing",
        )))
    }

    fn is_ready(&self) -> bool {
        false
    }

    fn analyze(&self, _text: &str) -> CheckResult<AnalysisResult> {
        Err(CheckError::NotInitialized)
    }
}

fn loaded_state(detector: &Detector) -> AppState {
    let mut state = AppState::new(detector.config());
    state.on_load(detector).unwrap();
    state
}

#[test]
fn test_on_load_enables_analysis() {
    let detector = Detector::new(DetectorConfig::default());
    let mut state = AppState::default();
    assert!(!state.analysis_enabled());

    state.on_load(&detector).unwrap();
    assert!(state.analysis_enabled());
    assert!(detector.is_initialized());
}

#[test]
fn test_failed_load_disables_analysis() {
    let mut state = AppState::default();
    let err = state.on_load(&BrokenService).unwrap_err();

    assert!(matches!(err, UiError::InitFailed(_)));
    assert_eq!(
        err.to_string(),
        "Failed to initialize plagiarism detector. Please refresh the page."
    );
    assert!(!state.analysis_enabled());

    state.set_text(SAMPLE);
    assert!(matches!(state.analyze(&BrokenService), Err(UiError::NotReady)));
}

#[test]
fn test_analyze_before_load_is_refused() {
    let detector = Detector::default();
    let mut state = AppState::default();
    state.set_text(SAMPLE);

    let err = state.analyze(&detector).unwrap_err();
    assert_eq!(err.to_string(), "Detector not initialized. Please wait...");
}

#[test]
fn test_blank_input_is_refused() {
    let detector = seeded_detector(1);
    let mut state = loaded_state(&detector);
    state.set_text("   ");

    let err = state.analyze(&detector).unwrap_err();
    assert_eq!(err.to_string(), "Please enter or upload some text to analyze");
}

#[test]
fn test_typed_text_takes_precedence_over_file() {
    let detector = seeded_detector(1);
    let mut state = loaded_state(&detector);
    state.accept_file("upload.txt", b"from the file").unwrap();
    assert_eq!(state.active_input(), "from the file");

    state.set_text("typed");
    assert_eq!(state.active_input(), "typed");

    state.set_text("");
    state.clear_file();
    assert_eq!(state.active_input(), "");
}

#[test]
fn test_uploaded_file_is_analyzed() {
    let detector = seeded_detector(2);
    let mut state = loaded_state(&detector);
    state.switch_tab(InputTab::Upload);
    state.accept_file("essay.txt", SAMPLE.as_bytes()).unwrap();

    let rendered = state.analyze(&detector).unwrap();
    assert_eq!(rendered.result.details.analysis.statistics.word_count, 6);
    assert!(rendered.statistics.contains("Word Count: <span>6</span>"));
    assert!(rendered.statistics.contains("Character Count: <span>23</span>"));
    assert_eq!(rendered.sources.matches("class=\"source-item\"").count(), 4);
    assert!(rendered.progress.contains(&format!("{}%", rendered.score)));
    assert_eq!(rendered.percentage, format!("{}%", rendered.score));
}

#[test]
fn test_rejected_file_leaves_state_untouched() {
    let detector = seeded_detector(1);
    let mut state = loaded_state(&detector);
    state.accept_file("first.txt", b"keep me").unwrap();

    let err = state.accept_file("virus.exe", b"MZ").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Please upload a valid document file (.txt, .doc, .docx, .pdf)"
    );
    let file = state.file().unwrap();
    assert_eq!(file.name, "first.txt");
    assert_eq!(file.content, "keep me");
}

#[test]
fn test_source_cards_follow_catalog() {
    let detector = seeded_detector(5);
    let result = detector.analyze(SAMPLE).unwrap();
    let cards = source_cards(&result);

    let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Academic Database",
            "Online Article",
            "Professional Publication",
            "Educational Resource"
        ]
    );
    // Only the academic and online categories have a synthetic match.
    assert_eq!(cards[2].match_score, 0);
    assert_eq!(cards[3].match_score, 0);
    // Every word of the sample is distinct.
    assert_eq!(cards[3].confidence, ConfidenceLevel::High);
    // Readability of the sample floors at zero.
    assert_eq!(cards[1].confidence, ConfidenceLevel::Low);
}

fn arb_tab() -> impl Strategy<Value = InputTab> {
    prop_oneof![Just(InputTab::Text), Just(InputTab::Upload)]
}

proptest! {
    #[test]
    fn test_exactly_one_section_active(clicks in proptest::collection::vec(arb_tab(), 0..30)) {
        let mut state = AppState::default();
        for tab in &clicks {
            state.switch_tab(*tab);
        }

        let sections = state.sections();
        prop_assert_eq!(sections.iter().filter(|s| s.active).count(), 1);
        let expected = clicks.last().copied().unwrap_or_default();
        prop_assert_eq!(state.active_tab(), expected);
    }

    #[test]
    fn test_disallowed_extensions_never_update_file(
        stem in "[a-z]{1,8}",
        ext in "(exe|png|zip|md|html)",
        body in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let mut state = AppState::default();
        let name = format!("{}.{}", stem, ext);
        prop_assert!(state.accept_file(&name, &body).is_err());
        prop_assert!(state.file().is_none());
    }
}
