/// Weight of the average word length in the readability formula.
pub const READABILITY_WORD_FACTOR: f64 = 4.71;

/// Weight of the average sentence length in the readability formula.
pub const READABILITY_SENTENCE_FACTOR: f64 = 0.5;

/// Constant term subtracted by the readability formula.
pub const READABILITY_OFFSET: f64 = 21.43;

/// Readability and the AI score both live on this scale.
pub const SCORE_CEILING: f64 = 100.0;

/// Divisor turning words-per-sentence into `sentence_complexity`.
pub const SENTENCE_COMPLEXITY_DIVISOR: f64 = 10.0;

/// Lower bound of the random style consistency. The span up to 1.0 is the same size.
pub const CONSISTENCY_FLOOR: f64 = 0.5;

/// Offset that centres formality on a text without marker words.
pub const FORMALITY_BASELINE: f64 = 0.5;

/// Appended to every similarity snippet.
pub const SNIPPET_ELLIPSIS: &str = "...";

/// Source labels of the two synthetic similarity matches, with their share of
/// the overall similarity.
pub const ACADEMIC_MATCH: (&str, f64) = ("Academic Database", 0.8);
pub const ONLINE_MATCH: (&str, f64) = ("Online Content", 0.6);

/// Characters of an uploaded document kept for the server log preview.
pub const UPLOAD_PREVIEW_CHARS: usize = 5000;
