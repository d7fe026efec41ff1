use std::collections::BTreeMap;

use serde::Serialize;

use crate::parser::{CanonicalField, CritiqueFields, SkillLevel};

/// Column headers of a rendered result table, in order.
pub const COLUMNS: [&str; 8] = [
    "Artwork",
    "Description",
    "Originality",
    "Composition",
    "Color",
    "Technique",
    "Overall",
    "Score",
];

/// Critique and score of one artwork.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EvaluationRecord {
    pub artwork: String,
    pub description: String,
    pub originality: String,
    pub composition: String,
    pub color: String,
    pub technique: String,
    pub overall: String,
    /// `None` when the scoring reply had no `Score: <number>`.
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub skill_levels: BTreeMap<CanonicalField, SkillLevel>,
}

impl EvaluationRecord {
    pub fn new(artwork: impl Into<String>, fields: &CritiqueFields, score: Option<f64>) -> Self {
        Self {
            artwork: artwork.into(),
            description: fields.get(CanonicalField::Description).to_string(),
            originality: fields.get(CanonicalField::Originality).to_string(),
            composition: fields.get(CanonicalField::Composition).to_string(),
            color: fields.get(CanonicalField::Color).to_string(),
            technique: fields.get(CanonicalField::Technique).to_string(),
            overall: fields.get(CanonicalField::Overall).to_string(),
            score,
            skill_levels: fields.skill_levels().clone(),
        }
    }

    pub fn field(&self, field: CanonicalField) -> &str {
        match field {
            CanonicalField::Description => &self.description,
            CanonicalField::Originality => &self.originality,
            CanonicalField::Composition => &self.composition,
            CanonicalField::Color => &self.color,
            CanonicalField::Technique => &self.technique,
            CanonicalField::Overall => &self.overall,
        }
    }

    /// Tier whose documented band contains the score.
    pub fn score_level(&self) -> Option<SkillLevel> {
        self.score.and_then(SkillLevel::for_score)
    }

    /// Cell values in [`COLUMNS`] order. A missing score is an empty cell.
    pub fn row(&self) -> [String; 8] {
        [
            self.artwork.clone(),
            self.description.clone(),
            self.originality.clone(),
            self.composition.clone(),
            self.color.clone(),
            self.technique.clone(),
            self.overall.clone(),
            self.score.map(format_score).unwrap_or_default(),
        ]
    }
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        score.to_string()
    }
}

/// Successfully evaluated artworks, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<EvaluationRecord>,
}

impl ResultSet {
    pub fn push(&mut self, record: EvaluationRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EvaluationRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[EvaluationRecord] {
        &self.records
    }
}

impl IntoIterator for ResultSet {
    type Item = EvaluationRecord;
    type IntoIter = std::vec::IntoIter<EvaluationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a EvaluationRecord;
    type IntoIter = std::slice::Iter<'a, EvaluationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
