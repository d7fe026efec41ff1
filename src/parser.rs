//! Best-effort extraction of structured fields from free-text model output.
//!
//! The critique is expected to follow the prompt's one-line-per-parameter
//! format, but models drift: brackets go missing, bullets appear, casing
//! changes, "Color and Tone" is shortened to "Color". Each line is split into
//! a key and a value, and the key is matched against an ordered alias table.
//! Output the table does not anticipate is silently dropped, so some
//! responses will misparse.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Multi-word criterion names from the critique prompt. Only these are kept
/// whole as a key; every other line splits at its first separator.
const LABEL_PHRASES: [&str; 4] = [
    "color and tone",
    "colour and tone",
    "technical proficiency",
    "overall impression",
];

static LABEL_PATTERN: OnceLock<Regex> = OnceLock::new();
static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();
static LEVEL_PATTERN: OnceLock<Regex> = OnceLock::new();
static SCORE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// One of the six output slots filled from a critique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CanonicalField {
    Description,
    Originality,
    Composition,
    Color,
    Technique,
    Overall,
}

impl CanonicalField {
    /// Matching order. The first field with a matching alias wins.
    pub const ALL: [CanonicalField; 6] = [
        CanonicalField::Description,
        CanonicalField::Originality,
        CanonicalField::Composition,
        CanonicalField::Color,
        CanonicalField::Technique,
        CanonicalField::Overall,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CanonicalField::Description => "Description",
            CanonicalField::Originality => "Originality",
            CanonicalField::Composition => "Composition",
            CanonicalField::Color => "Color",
            CanonicalField::Technique => "Technique",
            CanonicalField::Overall => "Overall",
        }
    }

    /// Lower-case substrings that identify this field in a line key.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::Description => &["description"],
            CanonicalField::Originality => &["originality"],
            CanonicalField::Composition => &["composition"],
            CanonicalField::Color => &["color", "colour"],
            CanonicalField::Technique => &["technical proficiency", "technique", "technical"],
            CanonicalField::Overall => &["overall", "overall impression"],
        }
    }

    /// Whether the field is a judged criterion and so carries a skill level.
    pub fn is_criterion(&self) -> bool {
        !matches!(self, CanonicalField::Description)
    }

    fn for_key(key: &str) -> Option<CanonicalField> {
        Self::ALL
            .into_iter()
            .find(|field| field.aliases().iter().any(|alias| key.contains(alias)))
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative tier assigned per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(rename = "Professional/Expert")]
    ProfessionalExpert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::ProfessionalExpert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::ProfessionalExpert => "Professional/Expert",
        }
    }

    /// Inclusive score band the scoring prompt associates with this tier.
    pub fn score_range(&self) -> (f64, f64) {
        match self {
            SkillLevel::Beginner => (1.0, 2.5),
            SkillLevel::Intermediate => (2.6, 5.0),
            SkillLevel::Advanced => (5.1, 7.5),
            SkillLevel::ProfessionalExpert => (7.6, 10.0),
        }
    }

    /// Tier whose band contains `score`. Scores between bands (e.g. 2.55)
    /// or outside 1..=10 have none.
    pub fn for_score(score: f64) -> Option<SkillLevel> {
        Self::ALL.into_iter().find(|level| {
            let (low, high) = level.score_range();
            (low..=high).contains(&score)
        })
    }

    fn from_label(label: &str) -> Option<SkillLevel> {
        let label = label.to_lowercase();
        let compact: String = label.split_whitespace().collect();
        match compact.as_str() {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "advanced" => Some(SkillLevel::Advanced),
            "professional/expert" | "professional" | "expert" => {
                Some(SkillLevel::ProfessionalExpert)
            }
            _ => None,
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The six canonical fields recovered from a critique.
///
/// Every field is always present; fields the critique never mentioned are
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CritiqueFields {
    values: BTreeMap<CanonicalField, String>,
    levels: BTreeMap<CanonicalField, SkillLevel>,
}

impl CritiqueFields {
    pub fn get(&self, field: CanonicalField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Skill level stated for a criterion, if the critique gave one.
    pub fn skill_level(&self, field: CanonicalField) -> Option<SkillLevel> {
        self.levels.get(&field).copied()
    }

    pub fn skill_levels(&self) -> &BTreeMap<CanonicalField, SkillLevel> {
        &self.levels
    }

    /// `(field, value)` pairs in canonical order, including empty fields.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &str)> + '_ {
        CanonicalField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Field name to value, with every canonical name present.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, value)| (field.name(), value.to_string()))
            .collect()
    }

    fn is_set(&self, field: CanonicalField) -> bool {
        self.values.contains_key(&field)
    }
}

/// Splits a critique into canonical fields.
///
/// A field keeps the value of the first line that names it with a non-empty
/// value; later lines with the same label are ignored.
pub fn parse(text: &str) -> CritiqueFields {
    let mut fields = CritiqueFields::default();
    for line in text.lines() {
        let line = strip_bullets(line.trim());
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = split_line(line) else {
            continue;
        };
        let Some(field) = CanonicalField::for_key(&key) else {
            continue;
        };
        if fields.is_set(field) {
            continue;
        }
        let value = clean_value(value);
        if value.is_empty() {
            continue;
        }
        if field.is_criterion() {
            if let Some((level, comment)) = split_skill_level(value) {
                fields.levels.insert(field, level);
                fields.values.insert(field, comment.to_string());
                continue;
            }
        }
        fields.values.insert(field, value.to_string());
    }
    fields
}

/// Numeric value of the first `Score: <number>` in `text`.
///
/// The number is passed through as written; nothing checks it against the
/// 1 to 10 scale the scoring prompt asks for.
pub fn extract_score(text: &str) -> Option<f64> {
    let pattern = SCORE_PATTERN.get_or_init(|| {
        Regex::new(r"Score:\s*(-?\d*\.?\d+)").expect("score pattern is valid")
    });
    pattern
        .captures_iter(text)
        .find_map(|caps| caps[1].parse::<f64>().ok())
}

fn strip_bullets(line: &str) -> &str {
    line.trim_start_matches(|c: char| matches!(c, '-' | '*' | '•') || c.is_whitespace())
}

/// Splits a line into its lower-cased key and raw value.
///
/// The key normally ends at the first run of whitespace, dashes or colons.
/// A criterion name from [`LABEL_PHRASES`] ended by a dash or colon
/// ("Color and Tone:") is taken whole instead, so its trailing words do not
/// leak into the value.
fn split_line(line: &str) -> Option<(String, &str)> {
    let labelled = LABEL_PATTERN.get_or_init(|| {
        Regex::new(r"^(.*?)\s*[\-–—:][\s\-–—:]*(.*)$").expect("label pattern is valid")
    });
    if let Some(caps) = labelled.captures(line) {
        let label = normalize_label(caps.get(1)?.as_str());
        if LABEL_PHRASES.contains(&label.as_str()) {
            return Some((label, caps.get(2)?.as_str()));
        }
    }
    let pattern = LINE_PATTERN.get_or_init(|| {
        Regex::new(r"^(.*?)[\s\-–—:]+(.*)$").expect("line pattern is valid")
    });
    let caps = pattern.captures(line)?;
    let key = caps.get(1)?.as_str().trim().to_lowercase();
    let value = caps.get(2)?.as_str();
    Some((key, value))
}

/// Lower-cases a label, drops surrounding brackets or bold markers and
/// collapses inner whitespace.
fn normalize_label(raw: &str) -> String {
    raw.trim_matches(|c: char| matches!(c, '[' | ']' | '(' | ')' | '*') || c.is_whitespace())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn clean_value(value: &str) -> &str {
    value
        .trim_start_matches(|c: char| matches!(c, '*' | '-' | ' '))
        .trim()
}

/// Splits `Advanced - comment` into its level and comment. The level must be
/// followed by a dash or colon so that prose such as "Advanced techniques..."
/// keeps its first word. A bare level is recorded and kept as the value.
fn split_skill_level(value: &str) -> Option<(SkillLevel, &str)> {
    let bare = value.trim_matches(|c: char| matches!(c, '[' | ']' | '(' | ')' | '*'));
    if let Some(level) = SkillLevel::from_label(bare) {
        return Some((level, value));
    }
    let pattern = LEVEL_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^[\[(*]*\s*(professional\s*/\s*expert|professional|expert|advanced|intermediate|beginner)\s*[\])*]*\s*[\-–—:|][\s\-–—:|]*(.*)$",
        )
        .expect("level pattern is valid")
    });
    let caps = pattern.captures(value)?;
    let level = SkillLevel::from_label(caps.get(1)?.as_str())?;
    let comment = clean_value(caps.get(2)?.as_str());
    if comment.is_empty() {
        return Some((level, value));
    }
    Some((level, comment))
}

#[cfg(test)]
mod tests;
