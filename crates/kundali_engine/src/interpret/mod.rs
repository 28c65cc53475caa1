//! Interpretation synthesizer.
//!
//! A pure function of the request. Each optional input adds facts and
//! prose; missing inputs leave no trace. The mood picks the wording from a
//! fixed (mood × length) table and never changes the facts. All three prose
//! lengths are always produced.

mod compose;
mod templates;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use kundali_vedic::dasha::DashaPeriod;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::NatalChart;
use crate::error::EngineError;
use crate::strength::{AshtakavargaReport, ShadbalaResult};
use crate::transit::TransitEntry;
use compose::Section;

/// Tone of the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Anxious,
    Confident,
    Stuck,
    Excited,
    Curious,
}

pub const ALL_MOODS: [Mood; 5] = [
    Mood::Anxious,
    Mood::Confident,
    Mood::Stuck,
    Mood::Excited,
    Mood::Curious,
];

impl Mood {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Anxious => "anxious",
            Self::Confident => "confident",
            Self::Stuck => "stuck",
            Self::Excited => "excited",
            Self::Curious => "curious",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_MOODS
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| {
                EngineError::InconsistentInterpretationRequest(format!("unknown mood: {s}"))
            })
    }
}

/// Target size of the primary narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Micro,
    #[default]
    Short,
    Long,
}

pub const ALL_LENGTHS: [Length; 3] = [Length::Micro, Length::Short, Length::Long];

impl Length {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Short => "short",
            Self::Long => "long",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Length {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_LENGTHS
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| {
                EngineError::InconsistentInterpretationRequest(format!("unknown length: {s}"))
            })
    }
}

/// Strength scores to weave into the narrative.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterpretationMetrics {
    pub shadbala: Vec<ShadbalaResult>,
    pub ashtakavarga: Option<AshtakavargaReport>,
}

/// Everything the synthesizer may draw on. Only `natal` is required.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpretationRequest {
    pub natal: Option<NatalChart>,
    /// A contiguous sibling list, normally the mahadashas.
    pub dashas: Option<Vec<DashaPeriod>>,
    pub transit: Option<Vec<TransitEntry>>,
    pub metrics: Option<InterpretationMetrics>,
    pub mood: Mood,
    pub length: Length,
    /// Instant for "current period" lookups. Without it the dasha section
    /// describes the sequence from birth.
    pub as_of: Option<DateTime<Utc>>,
}

impl InterpretationRequest {
    pub fn new(natal: NatalChart, mood: Mood, length: Length) -> Self {
        Self {
            natal: Some(natal),
            dashas: None,
            transit: None,
            metrics: None,
            mood,
            length,
            as_of: None,
        }
    }

    pub fn with_dashas(mut self, dashas: Vec<DashaPeriod>, as_of: Option<DateTime<Utc>>) -> Self {
        self.dashas = Some(dashas);
        self.as_of = as_of;
        self
    }

    pub fn with_transit(mut self, transit: Vec<TransitEntry>) -> Self {
        self.transit = Some(transit);
        self
    }

    pub fn with_metrics(mut self, metrics: InterpretationMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }
}

/// Narrative at all three lengths plus the structured lists behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretationResult {
    pub mood: Mood,
    /// The length the caller asked for; see [`InterpretationResult::text`].
    pub length: Length,
    pub micro: String,
    pub short: String,
    pub long: String,
    pub facts: Vec<String>,
    pub tips: Vec<String>,
    pub timings: Vec<String>,
}

impl InterpretationResult {
    pub fn text(&self, length: Length) -> &str {
        match length {
            Length::Micro => &self.micro,
            Length::Short => &self.short,
            Length::Long => &self.long,
        }
    }

    /// Narrative at the requested length.
    pub fn primary(&self) -> &str {
        self.text(self.length)
    }
}

fn micro(mood: Mood, sections: &[Section]) -> String {
    let template = templates::template(mood, Length::Micro);
    let mut headlines = sections.iter().filter_map(|s| s.headline.as_deref());
    let mut text = template.opening.to_string();
    if let Some(first) = headlines.next() {
        text.push(' ');
        text.push_str(first);
    }
    if let Some(second) = headlines.next() {
        text.push_str(", shaped by ");
        text.push_str(second);
    }
    text.push('.');
    text
}

fn short(mood: Mood, sections: &[Section]) -> String {
    let template = templates::template(mood, Length::Short);
    std::iter::once(template.opening)
        .chain(sections.iter().map(|s| s.summary.as_str()))
        .chain(std::iter::once(template.closing))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn long(mood: Mood, sections: &[Section], tips: &[String]) -> String {
    let template = templates::template(mood, Length::Long);
    let mut paragraphs: Vec<String> = Vec::with_capacity(sections.len() + 1);
    for (i, section) in sections.iter().enumerate() {
        let mut sentences: Vec<&str> = Vec::new();
        if i == 0 {
            sentences.push(template.opening);
        }
        sentences.extend(section.detail.iter().map(String::as_str));
        paragraphs.push(sentences.join(" "));
    }
    let closing: Vec<&str> = tips
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(template.closing))
        .filter(|s| !s.is_empty())
        .collect();
    if !closing.is_empty() {
        paragraphs.push(closing.join(" "));
    }
    paragraphs.join("\n\n")
}

/// Build the narrative for a request.
pub fn generate_interpretation(
    request: &InterpretationRequest,
) -> Result<InterpretationResult, EngineError> {
    let natal = request.natal.as_ref().ok_or_else(|| {
        EngineError::InconsistentInterpretationRequest("a natal chart is required".to_string())
    })?;
    debug!(
        subject = %natal.subject,
        mood = %request.mood,
        length = %request.length,
        dashas = request.dashas.is_some(),
        transit = request.transit.is_some(),
        metrics = request.metrics.is_some(),
        "generating interpretation"
    );

    let phrases = templates::tips(request.mood);
    let mut sections = vec![compose::natal_section(natal, phrases)];
    if let Some(dashas) = &request.dashas {
        sections.extend(compose::dasha_section(dashas, request.as_of, phrases)?);
    }
    if let Some(transit) = &request.transit {
        sections.extend(compose::transit_section(transit, phrases));
    }
    if let Some(metrics) = &request.metrics {
        sections.extend(compose::metrics_section(
            &metrics.shadbala,
            metrics.ashtakavarga.as_ref(),
            phrases,
        ));
    }

    let facts: Vec<String> = sections
        .iter()
        .flat_map(|s| s.facts.iter().cloned())
        .collect();
    let tips: Vec<String> = sections
        .iter()
        .flat_map(|s| s.tips.iter().cloned())
        .collect();
    let timings: Vec<String> = sections
        .iter()
        .flat_map(|s| s.timings.iter().cloned())
        .collect();

    Ok(InterpretationResult {
        mood: request.mood,
        length: request.length,
        micro: micro(request.mood, &sections),
        short: short(request.mood, &sections),
        long: long(request.mood, &sections, &tips),
        facts,
        tips,
        timings,
    })
}
