//! Terminal output for the `staple` binary.
//!
//! Column layout is computed on plain strings (see the `*_lines` helpers) and
//! only then styled, so widths are never thrown off by escape codes.

use colored::Colorize;
use staple::api::{CmdMessage, MessageLevel, WordlistInfo};
use staple::config::{GenerationConfig, CONFIG_KEYS};
use staple::entropy::StrengthReport;
use staple::generator::PassphraseResult;
use unicode_width::UnicodeWidthStr;

const INDENT: &str = "  ";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_passphrases(passphrases: &[PassphraseResult]) {
    for p in passphrases {
        println!("{}", p.joined.bold());
    }
}

pub fn print_strength(report: &StrengthReport) {
    println!();
    println!("{}", strength_summary(report));
    println!("{}", "Equivalent random passwords:".dimmed());
    for (label, detail, example) in equivalent_rows(report) {
        println!("{}{}  {}  {}", INDENT, label, detail.dimmed(), example.cyan());
    }
}

pub fn print_config(config: &GenerationConfig) {
    let width = column_width(CONFIG_KEYS.iter().copied());
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", pad_to_width(key, width).bold(), value);
    }
}

pub fn print_wordlists(wordlists: &[WordlistInfo]) {
    let width = column_width(wordlists.iter().map(|w| w.id.as_str()));
    for w in wordlists {
        println!(
            "{}{}",
            pad_to_width(&w.id, width).bold(),
            format!("  {} words", w.size).dimmed()
        );
    }
}

fn strength_summary(report: &StrengthReport) -> String {
    format!(
        "Entropy: {} bits ({} words from a list of {})",
        report.entropy_bits, report.word_count, report.wordlist_size
    )
}

/// One `(alphabet, "N chars", example)` row per alphabet, first two columns
/// padded to a common width.
fn equivalent_rows(report: &StrengthReport) -> Vec<(String, String, String)> {
    let names: Vec<String> = report
        .equivalents
        .iter()
        .map(|e| e.alphabet.to_string())
        .collect();
    let details: Vec<String> = report
        .equivalents
        .iter()
        .map(|e| format!("{} chars", e.length))
        .collect();

    let name_width = column_width(names.iter().map(String::as_str));
    let detail_width = column_width(details.iter().map(String::as_str));

    report
        .equivalents
        .iter()
        .zip(names.iter().zip(details.iter()))
        .map(|(e, (name, detail))| {
            (
                pad_to_width(name, name_width),
                pad_left_to_width(detail, detail_width),
                e.text.clone(),
            )
        })
        .collect()
}

fn column_width<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(|s| s.width()).max().unwrap_or(0)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn pad_left_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}
