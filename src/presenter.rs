//! Console and JSON rendering of ranked recommendations
//!
//! Renders hits in the order it receives them. Nothing here sorts or
//! filters.

use std::fmt::Write;

use serde::Serialize;

use crate::{
    config::RankConfig,
    recommender::ProfileOutcome,
    vectorizer::{
        corpus::Corpus, evaluate::scoring::Hits, profile::Profile, vocabulary::Vocabulary,
    },
};

/// Total table width
pub const TABLE_WIDTH: usize = 42;
const COLUMN_WIDTH: usize = 20;
/// Longest document id shown in a table row
pub const MAX_ID_CHARS: usize = 16;
/// Significant digits of a displayed score
const SCORE_PRECISION: i32 = 12;

/// Format a score with 12 significant digits and no trailing zeros
pub fn format_score(score: f64) -> String {
    if score == 0.0 || !score.is_finite() {
        return format!("{score:?}");
    }
    let magnitude = score.abs().log10().floor() as i32;
    let decimals = (SCORE_PRECISION - 1 - magnitude).max(0) as usize;
    let mut s = format!("{score:.decimals$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').len();
        s.truncate(trimmed);
        if s.ends_with('.') {
            s.push('0');
        }
    }
    s
}

fn rule(out: &mut String, c: char) {
    out.extend(std::iter::repeat(c).take(TABLE_WIDTH));
    out.push('\n');
}

/// Table of one profile's recommendations
pub fn render_profile(profile: &Profile, hits: &Hits) -> String {
    let mut out = String::new();
    rule(&mut out, '=');
    let _ = writeln!(out, "{:^TABLE_WIDTH$}", profile.id);
    rule(&mut out, '=');
    let interests = format!("Interests: {}", profile.distinct_interests().join(" & "));
    let _ = writeln!(out, "{interests:^TABLE_WIDTH$}");
    rule(&mut out, '=');
    let _ = writeln!(out, "{:^COLUMN_WIDTH$}||{:^COLUMN_WIDTH$}", "Recommendation", "Score");
    rule(&mut out, '=');
    for entry in hits.iter() {
        let id: String = entry.key.chars().take(MAX_ID_CHARS).collect();
        let score = format_score(entry.score);
        let _ = writeln!(out, "{id:^COLUMN_WIDTH$}||{score:^COLUMN_WIDTH$}");
        rule(&mut out, '=');
    }
    out
}

/// Table of a profile that could not be ranked
pub fn render_failure(profile: &Profile, error: &dyn std::error::Error) -> String {
    let mut out = String::new();
    rule(&mut out, '=');
    let _ = writeln!(out, "{:^TABLE_WIDTH$}", profile.id);
    rule(&mut out, '=');
    let _ = writeln!(out, "skipped: {error}");
    rule(&mut out, '=');
    out
}

pub fn render_footer(config: &RankConfig) -> String {
    format!("Documents with score less than {} are hidden\n", config.threshold)
}

/// Per-document term counts, one column per vocabulary term
pub fn render_frequencies(vocabulary: &Vocabulary, corpus: &Corpus) -> String {
    let mut out = String::new();
    rule(&mut out, '*');
    let _ = writeln!(out, "{:^TABLE_WIDTH$}", "Terms frequencies (similar grouped)");
    rule(&mut out, '*');

    let id_width = corpus
        .iter()
        .map(|(id, _)| id.chars().count())
        .max()
        .unwrap_or(0)
        .max("document".len());
    let _ = write!(out, "{:<id_width$}", "document");
    for stem in vocabulary.stems() {
        let _ = write!(out, " {stem:>8}");
    }
    let _ = writeln!(out, " {:>8}", "length");
    for (id, doc) in corpus.iter() {
        let _ = write!(out, "{id:<id_width$}");
        for count in doc.tf.as_slice() {
            let _ = write!(out, " {count:>8}");
        }
        let _ = writeln!(out, " {:>8}", doc.token_sum);
    }
    rule(&mut out, '*');
    out
}

#[derive(Debug, Serialize)]
struct ProfileReport<'a> {
    id: &'a str,
    interests: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendations: Option<&'a Hits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    vocabulary: Vec<&'a str>,
    config: &'a RankConfig,
    profiles: Vec<ProfileReport<'a>>,
}

/// Whole run as pretty JSON
pub fn render_json(
    vocabulary: &Vocabulary,
    config: &RankConfig,
    outcomes: &[ProfileOutcome<'_>],
) -> serde_json::Result<String> {
    let report = Report {
        vocabulary: vocabulary.stems().collect(),
        config,
        profiles: outcomes
            .iter()
            .map(|o| ProfileReport {
                id: &o.profile.id,
                interests: o.profile.distinct_interests(),
                recommendations: o.result.as_ref().ok(),
                error: o.result.as_ref().err().map(|e| e.to_string()),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
