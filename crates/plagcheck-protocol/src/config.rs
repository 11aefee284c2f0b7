use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables of the simulated detector.
///
/// Every field doubles as a command line flag and as a key of the JSON
/// config file, so the defaults below must stay in sync with the
/// `default_value` attributes.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectorConfig {
    // === COMBINATION ===
    #[arg(long, default_value_t = 0.7)]
    pub ai_weight: f64,
    #[arg(long, default_value_t = 0.3)]
    pub similarity_weight: f64,
    #[arg(long, default_value_t = 60)]
    pub plagiarism_threshold: u8,

    // === AI DETECTION ===
    #[arg(long, default_value_t = 40.0)]
    pub ai_base_min: f64,
    #[arg(long, default_value_t = 20.0)]
    pub ai_base_span: f64,
    #[arg(long, default_value_t = 60.0)]
    pub ai_label_threshold: f64,
    #[arg(long, default_value_t = 80.0)]
    pub ai_high_confidence: f64,

    // === SIMILARITY ===
    #[arg(long, default_value_t = 0.4)]
    pub max_similarity: f64,
    #[arg(long, default_value_t = 100)]
    pub snippet_chars: usize,

    // === VOCABULARY ===
    #[arg(
        long,
        default_value = "furthermore,however,therefore,consequently,nevertheless"
    )]
    pub formal_markers: String,
    #[arg(long, default_value = "yeah,nah,gonna,wanna,gotta")]
    pub informal_markers: String,

    // === INTAKE ===
    #[arg(long, default_value = "txt,doc,docx,pdf")]
    pub allowed_extensions: String,

    /// Fixes the random stream so repeated runs agree.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            ai_weight: 0.7,
            similarity_weight: 0.3,
            plagiarism_threshold: 60,
            ai_base_min: 40.0,
            ai_base_span: 20.0,
            ai_label_threshold: 60.0,
            ai_high_confidence: 80.0,
            max_similarity: 0.4,
            snippet_chars: 100,
            formal_markers: "furthermore,however,therefore,consequently,nevertheless".to_string(),
            informal_markers: "yeah,nah,gonna,wanna,gotta".to_string(),
            allowed_extensions: "txt,doc,docx,pdf".to_string(),
            seed: None,
        }
    }
}

impl DetectorConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;

        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))
    }

    pub fn get_formal_markers(&self) -> Vec<String> {
        parse_word_list(&self.formal_markers)
    }

    pub fn get_informal_markers(&self) -> Vec<String> {
        parse_word_list(&self.informal_markers)
    }

    /// Extensions without the leading dot, lower-cased.
    pub fn get_allowed_extensions(&self) -> Vec<String> {
        parse_word_list(&self.allowed_extensions)
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect()
    }

    /// Overlays only the flags the user actually typed, so a config file
    /// keeps its values for everything left at the clap default.
    pub fn merge_from_cli(&mut self, cli: &DetectorConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(ai_weight, "ai_weight");
        update_if_present!(similarity_weight, "similarity_weight");
        update_if_present!(plagiarism_threshold, "plagiarism_threshold");

        update_if_present!(ai_base_min, "ai_base_min");
        update_if_present!(ai_base_span, "ai_base_span");
        update_if_present!(ai_label_threshold, "ai_label_threshold");
        update_if_present!(ai_high_confidence, "ai_high_confidence");

        update_if_present!(max_similarity, "max_similarity");
        update_if_present!(snippet_chars, "snippet_chars");

        update_if_present!(formal_markers, "formal_markers");
        update_if_present!(informal_markers, "informal_markers");

        update_if_present!(allowed_extensions, "allowed_extensions");
        update_if_present!(seed, "seed");
    }
}

fn parse_word_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
