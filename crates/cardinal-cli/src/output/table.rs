//! Table formatting utilities for CLI output.

use cardinal::Vocabulary;
use comfy_table::{ContentArrangement, Table, presets};

/// Format the vocabulary as an ASCII table.
pub fn format_vocabulary_table(vocabulary: &Vocabulary) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Word", "Role", "Value"]);

    for (word, token) in vocabulary.entries() {
        table.add_row(vec![
            (*word).to_string(),
            token.role().to_string(),
            token.value().map(|v| v.to_string()).unwrap_or_default(),
        ]);
    }

    table
}
