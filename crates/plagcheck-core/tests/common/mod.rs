#![allow(dead_code)]

use plagcheck_core::config::DetectorConfig;
use plagcheck_core::detector::Detector;

pub const SAMPLE: &str = "Hello world. This is a test.";

pub const ESSAY: &str = "Furthermore, the committee reviewed the proposal in detail. \
However the budget was insufficient. Therefore the project was postponed! \
Nevertheless, several members argued that the long-term benefits outweighed \
the immediate costs, and consequently a revised plan was requested?";

/// Seeded, already initialized detector.
pub fn seeded_detector(seed: u64) -> Detector {
    let config = DetectorConfig {
        seed: Some(seed),
        ..Default::default()
    };
    Detector::ready(config).expect("initialization never fails")
}
