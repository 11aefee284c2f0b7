use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use plagcheck_core::analyzer::AnalysisResult;
use plagcheck_core::checker::CheckerResponse;
use plagcheck_core::view::{ConfidenceLevel, RenderedUpload, SourceCard};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn confidence_color(level: ConfidenceLevel) -> Color {
    match level {
        ConfidenceLevel::High => Color::Red,
        ConfidenceLevel::Medium => Color::Yellow,
        ConfidenceLevel::Low => Color::Green,
    }
}

pub fn verdict(result: &AnalysisResult) {
    let ai = &result.details.ai_detection;
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Verdict").add_attribute(Attribute::Bold),
        Cell::new("AI Prob").fg(Color::Cyan),
        Cell::new("AI Label"),
        Cell::new("Confidence"),
        Cell::new("Similarity"),
    ]);

    let (verdict, color) = if result.is_likely_plagiarized {
        ("Likely plagiarized", Color::Red)
    } else {
        ("Likely original", Color::Green)
    };

    table.add_row(vec![
        Cell::new(format!("{}%", result.score)).add_attribute(Attribute::Bold),
        Cell::new(verdict).fg(color),
        Cell::new(format!("{:.1}%", ai.probability * 100.0)).fg(Color::Cyan),
        Cell::new(ai.label.to_string()),
        Cell::new(ai.confidence.to_string()),
        Cell::new(format!(
            "{:.1}%",
            result.details.similarity.overall_similarity * 100.0
        )),
    ]);

    for i in [0, 2, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("\n{}", table);
}

pub fn sources(cards: &[SourceCard]) {
    if cards.is_empty() {
        println!("\nNo significant matches found");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Source").add_attribute(Attribute::Bold),
        Cell::new("URL"),
        Cell::new("Description"),
        Cell::new("Confidence"),
        Cell::new("Match").fg(Color::Cyan),
    ]);

    for card in cards {
        table.add_row(vec![
            Cell::new(&card.name).add_attribute(Attribute::Bold),
            Cell::new(&card.base_url),
            Cell::new(&card.description),
            Cell::new(card.confidence.to_string()).fg(confidence_color(card.confidence)),
            Cell::new(format!("{}%", card.match_score)).fg(Color::Cyan),
        ]);
    }

    if let Some(col) = table.column_mut(4) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("\n{}", table);
}

pub fn statistics(result: &AnalysisResult) {
    let stats = &result.details.analysis.statistics;
    let style = &result.details.analysis.style;
    let complexity = &result.details.analysis.complexity;

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let rows = [
        ("Word Count", stats.word_count.to_string()),
        ("Character Count", stats.character_count.to_string()),
        ("Unique Words", stats.unique_words.to_string()),
        ("Average Word Length", format!("{:.2}", stats.average_word_length)),
        ("Writing Style", style.tone.to_string()),
        ("Formality", format!("{:.2}", style.formality)),
        ("Style Consistency", format!("{:.1}%", style.consistency * 100.0)),
        ("Readability", format!("{:.1}", complexity.readability)),
        ("Sentence Complexity", format!("{:.2}", complexity.sentence_complexity)),
        (
            "Vocabulary Diversity",
            format!("{:.1}%", complexity.vocabulary_diversity * 100.0),
        ),
    ];

    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("\n{}", table);
}

pub fn upload(response: &CheckerResponse, rendered: &RenderedUpload) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Document").add_attribute(Attribute::Bold),
        Cell::new("ID"),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new(rendered.filename.as_deref().unwrap_or("-")).add_attribute(Attribute::Bold),
        Cell::new(
            response
                .document_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        Cell::new(&rendered.percentage).fg(Color::Cyan),
    ]);
    println!("\n{}", table);

    if response.matched_sources.is_empty() {
        println!("No significant matches found");
        return;
    }

    let mut sources = new_table();
    sources.add_row(vec![Cell::new("Matched Sources").add_attribute(Attribute::Bold)]);
    for source in &response.matched_sources {
        sources.add_row(vec![Cell::new(source)]);
    }
    println!("{}", sources);
}
