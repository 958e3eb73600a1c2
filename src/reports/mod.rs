use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use glyphbreak::cipher::{Ciphertext, FrequencyBasis, Word};
use glyphbreak::history::RankedKey;
use glyphbreak::optimizer::{PolishReport, SearchReport};
use std::collections::BTreeSet;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn word_text(word: &Word) -> String {
    word.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_ranking(ranked: &[RankedKey], total: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Key").add_attribute(Attribute::Bold),
    ]);
    right_align(&mut table, 0..=1);

    for (i, entry) in ranked.iter().enumerate() {
        let key = entry
            .key
            .as_ref()
            .map_or_else(|| "-".to_string(), |k| k.to_string());
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{:.4}", entry.score)).fg(Color::Cyan),
            Cell::new(key),
        ]);
    }
    println!("\nTop {} of {} checked keys", ranked.len(), total);
    println!("{}", table);
}

pub fn print_search_report(report: &SearchReport) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Checked").add_attribute(Attribute::Bold),
        Cell::new("Best").fg(Color::Cyan),
        Cell::new("Exhausted"),
        Cell::new("Key").add_attribute(Attribute::Bold),
    ]);
    right_align(&mut table, 0..=1);

    let exhausted = if report.exhausted {
        Cell::new("yes").fg(Color::Red)
    } else {
        Cell::new("no")
    };
    table.add_row(vec![
        Cell::new(report.evaluated),
        Cell::new(format!("{:.4}", report.best_score)).fg(Color::Cyan),
        exhausted,
        Cell::new(
            report
                .best_key
                .as_ref()
                .map_or_else(|| "-".to_string(), |k| k.to_string()),
        ),
    ]);
    println!("\n{}", table);
}

pub fn print_polish_report(report: &PolishReport) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rounds").add_attribute(Attribute::Bold),
        Cell::new("Checked"),
        Cell::new("Best").fg(Color::Cyan),
        Cell::new("Stopped Early"),
    ]);
    right_align(&mut table, 0..=2);

    let stopped = if report.stopped_early {
        Cell::new("yes").fg(Color::Yellow)
    } else {
        Cell::new("no")
    };
    table.add_row(vec![
        Cell::new(report.rounds),
        Cell::new(report.evaluated),
        Cell::new(format!("{:.4}", report.best_score)).fg(Color::Cyan),
        stopped,
    ]);
    println!("\n{}", table);
}

pub fn print_english_words(words: &BTreeSet<String>) {
    println!("\n{} English words:", words.len());
    for word in words {
        println!("  {}", word);
    }
}

pub fn print_overview(cipher: &Ciphertext) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Symbols").add_attribute(Attribute::Bold),
        Cell::new("Unknown"),
        Cell::new("Words"),
        Cell::new("Distinct Words"),
    ]);
    right_align(&mut table, 0..=3);
    table.add_row(vec![
        Cell::new(cipher.symbols().len()),
        Cell::new(cipher.unknown_symbols().len()),
        Cell::new(cipher.words().len()),
        Cell::new(cipher.distinct_words().len()),
    ]);
    println!("\n{}", table);
}

pub fn print_symbol_frequencies(cipher: &Ciphertext, basis: FrequencyBasis) {
    let counts = cipher.symbol_frequency(basis);
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Symbol").add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
        Cell::new("Hint").fg(Color::Green),
    ]);
    right_align(&mut table, 0..=2);

    for (i, symbol) in cipher.ranking(basis).as_slice().iter().enumerate() {
        let hint: String = cipher
            .guesses()
            .get(symbol)
            .map(|letters| letters.iter().map(char::to_string).collect::<Vec<_>>().join("/"))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(symbol),
            Cell::new(counts.get(symbol).copied().unwrap_or(0)).fg(Color::Cyan),
            Cell::new(hint).fg(Color::Green),
        ]);
    }
    println!("\nSymbol frequencies ({})", basis);
    println!("{}", table);
}

pub fn print_word_frequencies(cipher: &Ciphertext, top: usize) {
    // Most repeated first, first occurrence breaks ties.
    let freq = cipher.word_frequency();
    let mut words: Vec<&Word> = cipher.distinct_words().iter().collect();
    words.sort_by_key(|w| std::cmp::Reverse(freq.get(*w).copied().unwrap_or(0)));

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Length"),
        Cell::new("Count").fg(Color::Cyan),
    ]);
    right_align(&mut table, 1..=2);

    for word in words.into_iter().take(top) {
        table.add_row(vec![
            Cell::new(word_text(word)),
            Cell::new(word.len()),
            Cell::new(freq.get(word).copied().unwrap_or(0)).fg(Color::Cyan),
        ]);
    }
    println!("\nMost repeated words");
    println!("{}", table);
}
