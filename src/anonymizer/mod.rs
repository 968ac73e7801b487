pub mod cities;
pub mod patterns;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use self::cities::KNOWN_CITIES;
use self::patterns::{
    overlaps_any, provincial_spans, BOUNDED_DISTRICT_REGEX, DISTRICT_FRAGMENTS,
    DISTRICT_SUFFIXES, FRAGMENT_MAX_CHARS, FRAGMENT_MIN_CHARS, SUB_DISTRICT_REGEX,
};

/// Placeholder substituted for a recognized place name.
pub const GENERIC_MARKER: &str = "某";
/// Replacement for a known city name.
pub const CITY_MARKER: &str = "某市";

/// The substitution pass that produced a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Stage {
    KnownCity,
    CuratedDistrict,
    BoundedDistrict,
    SubDistrict,
    MarkerCollapse,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::KnownCity => write!(f, "known-city"),
            Stage::CuratedDistrict => write!(f, "curated-district"),
            Stage::BoundedDistrict => write!(f, "bounded-district"),
            Stage::SubDistrict => write!(f, "sub-district"),
            Stage::MarkerCollapse => write!(f, "marker-collapse"),
        }
    }
}

/// A single substitution applied to the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub stage: Stage,
    pub original: String,
    pub replacement: String,
}

impl Replacement {
    fn new(stage: Stage, original: &str, replacement: &str) -> Self {
        Self {
            stage,
            original: original.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

/// Anonymized text together with every substitution made, in application order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnonymizedText {
    pub text: String,
    pub replacements: Vec<Replacement>,
}

impl AnonymizedText {
    pub fn count(&self, stage: Stage) -> usize {
        self.replacements.iter().filter(|r| r.stage == stage).count()
    }

    pub fn is_changed(&self) -> bool {
        !self.replacements.is_empty()
    }
}

/// Replaces city, district, county, township and village names with generic
/// markers while leaving province-level references alone.
///
/// The transform is pure: it reads only static tables and never fails.
#[derive(Debug, Clone)]
pub struct Anonymizer {
    known_cities: &'static [&'static str],
}

impl Default for Anonymizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Anonymizer {
    pub fn new() -> Self {
        Self::with_cities(KNOWN_CITIES)
    }

    /// Uses `known_cities` instead of the built-in table. Names are checked in
    /// slice order, so a name must come before any name it contains.
    pub fn with_cities(known_cities: &'static [&'static str]) -> Self {
        Anonymizer { known_cities }
    }

    /// Anonymizes `text`. Empty input comes back empty.
    #[inline]
    pub fn anonymize_text(&self, text: &str) -> String {
        self.anonymize_with_report(text).text
    }

    /// Absent values stay absent; present values are anonymized.
    pub fn anonymize_field(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.anonymize_text(t))
    }

    /// Runs every stage in order and records what each one replaced.
    pub fn anonymize_with_report(&self, text: &str) -> AnonymizedText {
        if text.is_empty() {
            return AnonymizedText::default();
        }

        let mut replacements = Vec::new();

        let result = self.replace_known_cities(text, &mut replacements);
        let result = replace_curated_districts(&result, &mut replacements);
        let result = replace_bounded(
            &BOUNDED_DISTRICT_REGEX,
            Stage::BoundedDistrict,
            &result,
            &mut replacements,
        );
        let result = replace_bounded(
            &SUB_DISTRICT_REGEX,
            Stage::SubDistrict,
            &result,
            &mut replacements,
        );
        let result = collapse_markers(result, &mut replacements);

        debug!(
            "Anonymized text ({} chars): {} replacements",
            text.chars().count(),
            replacements.len()
        );

        AnonymizedText {
            text: result,
            replacements,
        }
    }

    /// Anonymizes every string leaf of a JSON value in place. Object keys are
    /// left as they are.
    pub fn anonymize_json(&self, value: &mut Value) -> Vec<Replacement> {
        match value {
            Value::String(s) => {
                let anonymized = self.anonymize_with_report(s);
                if anonymized.is_changed() {
                    *s = anonymized.text;
                }
                anonymized.replacements
            }
            Value::Array(items) => items
                .iter_mut()
                .flat_map(|item| self.anonymize_json(item))
                .collect(),
            Value::Object(map) => map
                .values_mut()
                .flat_map(|item| self.anonymize_json(item))
                .collect(),
            _ => Vec::new(),
        }
    }

    // Table order matters only for nested names; longer names precede the
    // names they contain.
    fn replace_known_cities(&self, text: &str, report: &mut Vec<Replacement>) -> String {
        let mut result = text.to_string();
        for city in self.known_cities {
            let hits = result.matches(city).count();
            if hits == 0 {
                continue;
            }
            trace!("Replacing known city {} ({} occurrences)", city, hits);
            report.extend(
                std::iter::repeat_with(|| Replacement::new(Stage::KnownCity, city, CITY_MARKER))
                    .take(hits),
            );
            result = result.replace(city, CITY_MARKER);
        }
        result
    }
}

/// Replaces an allow-listed fragment directly before 区 or 县, whatever follows.
fn replace_curated_districts(text: &str, report: &mut Vec<Replacement>) -> String {
    let spans = provincial_spans(text);
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut result = String::with_capacity(text.len());
    let mut copied = 0;
    let mut floor = 0;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        if !DISTRICT_SUFFIXES.contains(&c) {
            continue;
        }

        let available = i - floor;
        let end_offset = offset + c.len_utf8();
        let fragment_start = (FRAGMENT_MIN_CHARS..=FRAGMENT_MAX_CHARS.min(available))
            .rev()
            .map(|len| i - len)
            .find(|&start| {
                DISTRICT_FRAGMENTS.contains(&text[chars[start].0..offset])
                    && !overlaps_any(&spans, chars[start].0, end_offset)
            });

        if let Some(start) = fragment_start {
            let start_offset = chars[start].0;
            let replacement = format!("{}{}", GENERIC_MARKER, c);
            trace!("Replacing curated district {}", &text[start_offset..end_offset]);
            report.push(Replacement::new(
                Stage::CuratedDistrict,
                &text[start_offset..end_offset],
                &replacement,
            ));
            result.push_str(&text[copied..start_offset]);
            result.push_str(&replacement);
            copied = end_offset;
            floor = i + 1;
        }
    }

    result.push_str(&text[copied..]);
    result
}

/// Replaces `name` + `suffix` matches of a boundary pattern with the marker
/// plus the suffix. The boundary character is left in place.
///
/// A candidate is skipped, and the search resumes one character later, when
/// its run starts right after a marker or touches a provincial-region name.
fn replace_bounded(
    regex: &Regex,
    stage: Stage,
    text: &str,
    report: &mut Vec<Replacement>,
) -> String {
    let spans = provincial_spans(text);
    let mut result = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search_from = 0;

    while let Some(caps) = regex.captures_at(text, search_from) {
        let (Some(name), Some(suffix)) = (caps.name("name"), caps.name("suffix")) else {
            break;
        };
        let start = name.start();

        if text[..start].ends_with(GENERIC_MARKER) || overlaps_any(&spans, start, suffix.end()) {
            search_from = start + text[start..].chars().next().map_or(1, char::len_utf8);
            continue;
        }

        let replacement = format!("{}{}", GENERIC_MARKER, suffix.as_str());
        trace!("Replacing {} match {}", stage, &text[start..suffix.end()]);
        report.push(Replacement::new(
            stage,
            &text[start..suffix.end()],
            &replacement,
        ));
        result.push_str(&text[copied..start]);
        result.push_str(&replacement);
        copied = suffix.end();
        search_from = caps.get(0).map_or(copied, |m| m.end());
    }

    result.push_str(&text[copied..]);
    result
}

fn collapse_markers(text: String, report: &mut Vec<Replacement>) -> String {
    let doubled = GENERIC_MARKER.repeat(2);
    let mut result = text;
    while result.contains(&doubled) {
        let hits = result.matches(&doubled).count();
        report.extend(
            std::iter::repeat_with(|| {
                Replacement::new(Stage::MarkerCollapse, &doubled, GENERIC_MARKER)
            })
            .take(hits),
        );
        result = result.replace(&doubled, GENERIC_MARKER);
    }
    result
}
