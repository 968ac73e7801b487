use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::anonymizer::{Anonymizer, Replacement, Stage};
use crate::utils::settings::InputFormat;

/// Result of anonymizing a multi-line input
#[derive(Debug, Default)]
pub struct BatchOutput {
    pub lines: Vec<String>,
    pub stage_counts: BTreeMap<Stage, usize>,
    pub changed_lines: usize,
}

impl BatchOutput {
    fn record(&mut self, replacements: &[Replacement]) {
        if !replacements.is_empty() {
            self.changed_lines += 1;
        }
        for replacement in replacements {
            *self.stage_counts.entry(replacement.stage).or_insert(0) += 1;
        }
    }

    pub fn total_replacements(&self) -> usize {
        self.stage_counts.values().sum()
    }

    /// Human-readable per-stage summary
    pub fn summary(&self) -> String {
        let mut report = format!(
            "Lines: {} (changed: {})\nReplacements: {}\n",
            self.lines.len(),
            self.changed_lines,
            self.total_replacements()
        );
        for (stage, count) in &self.stage_counts {
            report.push_str(&format!("  {}: {}\n", stage, count));
        }
        report
    }
}

/// Anonymizes `input` line by line in the given format.
///
/// Text lines are processed as-is, blank lines included. In JSON-lines mode
/// blank lines are skipped and a line that fails to parse aborts the batch.
pub fn anonymize_lines(
    anonymizer: &Anonymizer,
    input: &str,
    format: InputFormat,
) -> Result<BatchOutput> {
    let mut output = BatchOutput::default();

    for (idx, line) in input.lines().enumerate() {
        match format {
            InputFormat::Text => {
                let anonymized = anonymizer.anonymize_with_report(line);
                output.record(&anonymized.replacements);
                output.lines.push(anonymized.text);
            }
            InputFormat::Jsonl => {
                if line.trim().is_empty() {
                    debug!("Skipping blank line {}", idx + 1);
                    continue;
                }
                let mut record: Value = serde_json::from_str(line)
                    .with_context(|| format!("Invalid JSON on line {}", idx + 1))?;
                let replacements = anonymizer.anonymize_json(&mut record);
                output.record(&replacements);
                output.lines.push(serde_json::to_string(&record)?);
            }
        }
    }

    info!(
        "Processed {} lines, {} changed, {} replacements",
        output.lines.len(),
        output.changed_lines,
        output.total_replacements()
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines() {
        let anonymizer = Anonymizer::new();
        let input = "杭州市西湖区某街道123号\n\n浙江省市场监督管理局";
        let output = anonymize_lines(&anonymizer, input, InputFormat::Text).unwrap();

        assert_eq!(
            output.lines,
            vec!["某市某区某街道123号", "", "浙江省市场监督管理局"]
        );
        assert_eq!(output.changed_lines, 1);
        assert_eq!(output.stage_counts.get(&Stage::KnownCity), Some(&1));
        assert_eq!(output.stage_counts.get(&Stage::CuratedDistrict), Some(&1));
        assert_eq!(output.total_replacements(), 2);
    }

    #[test]
    fn test_jsonl_lines() {
        let anonymizer = Anonymizer::new();
        let input = "{\"documentOrg\":\"宁波市经信局\",\"seq\":1}\n\n{\"documentOrg\":\"浙江省财政厅\"}\n";
        let output = anonymize_lines(&anonymizer, input, InputFormat::Jsonl).unwrap();

        assert_eq!(output.lines.len(), 2);
        let first: Value = serde_json::from_str(&output.lines[0]).unwrap();
        assert_eq!(first["documentOrg"], "某市经信局");
        assert_eq!(first["seq"], 1);
        assert_eq!(output.changed_lines, 1);
    }

    #[test]
    fn test_jsonl_reports_bad_line() {
        let anonymizer = Anonymizer::new();
        let input = "{\"a\":\"b\"}\nnot json";
        let err = anonymize_lines(&anonymizer, input, InputFormat::Jsonl).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_summary_lists_stages() {
        let anonymizer = Anonymizer::new();
        let output = anonymize_lines(&anonymizer, "良渚镇。", InputFormat::Text).unwrap();
        let summary = output.summary();
        assert!(summary.contains("sub-district: 1"));
        assert!(summary.contains("Replacements: 1"));
    }
}
