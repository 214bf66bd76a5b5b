//! # Instruction Parser
//!
//! Classifies recipe instruction lines into numbered steps, tips, section
//! headings and timed entries.
//!
//! Markers are tested in a fixed priority order and the first match wins:
//!
//! 1. Timed: `⏱ 10 min: Let the dough rest`
//! 2. Overview: `Overview: Prep the vegetables while the oven heats`
//! 3. Tip: `💡 Use cold butter` or `Tip: use cold butter`
//! 4. Heading: `## For the sauce`
//! 5. Anything else is a step

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Kind of an instruction entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstructionType {
    Step,
    Tip,
    Heading,
    Timed,
}

/// A classified instruction line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionEntry {
    #[serde(rename = "type")]
    pub kind: InstructionType,

    pub content: String,

    /// Minutes, only for timed entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,

    /// 1-indexed step number, only for steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_number: Option<u32>,
}

lazy_static! {
    static ref TIMED_MARKER: Regex = Regex::new(
        r"^(?:⏱|⏲|⏰|🕐|🕒)\x{FE0F}?\s*(\d+)\s*(?i:min(?:s|utes?)?)\.?\s*[:\-–—|]\s*(.+)$"
    )
    .unwrap();
    static ref OVERVIEW_MARKER: Regex = Regex::new(r"^(?i:overview)\s*:\s*(.+)$").unwrap();
    static ref TIP_MARKER: Regex =
        Regex::new(r"^(?:💡\x{FE0F}?\s*(?:(?i:tips?)\s*:\s*)?|(?i:tips?)\s*:\s*)(.+)$").unwrap();
    static ref HEADING_MARKER: Regex = Regex::new(r"^#{2,3}\s*([^#\s].*)$").unwrap();
}

impl InstructionEntry {
    fn new(kind: InstructionType, content: &str) -> Self {
        Self {
            kind,
            content: content.trim().to_string(),
            time: None,
            step_number: None,
        }
    }

    pub fn is_step(&self) -> bool {
        self.kind == InstructionType::Step
    }
}

/// Classify one instruction line
///
/// `step_counter` is the number the entry gets if it turns out to be a step.
/// The counter is never advanced here: callers bump their own counter after a
/// step result.
///
/// # Examples
///
/// ```rust
/// use mealprep::instruction_parser::{classify_instruction, InstructionType};
///
/// let entry = classify_instruction("⏱ 15 min: Let it rest", 1);
/// assert_eq!(entry.kind, InstructionType::Timed);
/// assert_eq!(entry.time, Some(15));
///
/// let entry = classify_instruction("Preheat the oven", 3);
/// assert_eq!(entry.kind, InstructionType::Step);
/// assert_eq!(entry.step_number, Some(3));
/// ```
pub fn classify_instruction(raw: &str, step_counter: u32) -> InstructionEntry {
    let line = raw.trim();

    if let Some(captures) = TIMED_MARKER.captures(line) {
        let mut entry = InstructionEntry::new(InstructionType::Timed, &captures[2]);
        entry.time = captures[1].parse().ok();
        trace!("Timed entry ({:?} min): '{}'", entry.time, entry.content);
        return entry;
    }

    if let Some(captures) = OVERVIEW_MARKER.captures(line) {
        return InstructionEntry::new(InstructionType::Timed, &captures[1]);
    }

    if let Some(captures) = TIP_MARKER.captures(line) {
        return InstructionEntry::new(InstructionType::Tip, &captures[1]);
    }

    if let Some(captures) = HEADING_MARKER.captures(line) {
        return InstructionEntry::new(InstructionType::Heading, &captures[1]);
    }

    let mut entry = InstructionEntry::new(InstructionType::Step, line);
    entry.step_number = Some(step_counter);
    entry
}

/// Classify a recipe's instruction lines, numbering steps from 1
///
/// Blank lines are skipped and do not consume a step number.
pub fn parse_instructions<S: AsRef<str>>(lines: &[S]) -> Vec<InstructionEntry> {
    let mut step_counter = 1;
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let entry = classify_instruction(line, step_counter);
            if entry.is_step() {
                step_counter += 1;
            }
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_marker() {
        let entry = classify_instruction("⏱ 10 min: Let the dough rest", 1);
        assert_eq!(entry.kind, InstructionType::Timed);
        assert_eq!(entry.time, Some(10));
        assert_eq!(entry.content, "Let the dough rest");
        assert_eq!(entry.step_number, None);

        let entry = classify_instruction("⏲️45 Minutes - Bake", 1);
        assert_eq!(entry.time, Some(45));
        assert_eq!(entry.content, "Bake");
    }

    #[test]
    fn test_overview_marker() {
        let entry = classify_instruction("Overview: roast, then blend", 1);
        assert_eq!(entry.kind, InstructionType::Timed);
        assert_eq!(entry.time, None);
        assert_eq!(entry.content, "roast, then blend");
    }

    #[test]
    fn test_tip_marker() {
        let entry = classify_instruction("💡 Use cold butter", 1);
        assert_eq!(entry.kind, InstructionType::Tip);
        assert_eq!(entry.content, "Use cold butter");

        let entry = classify_instruction("Tips: chill the bowl", 1);
        assert_eq!(entry.kind, InstructionType::Tip);
        assert_eq!(entry.content, "chill the bowl");

        let entry = classify_instruction("💡 Tip: sift the flour", 1);
        assert_eq!(entry.content, "sift the flour");
    }

    #[test]
    fn test_heading_marker() {
        let entry = classify_instruction("## For the sauce", 1);
        assert_eq!(entry.kind, InstructionType::Heading);
        assert_eq!(entry.content, "For the sauce");

        let entry = classify_instruction("###Topping", 1);
        assert_eq!(entry.kind, InstructionType::Heading);
        assert_eq!(entry.content, "Topping");
    }

    #[test]
    fn test_too_many_or_too_few_hashes_are_steps() {
        assert_eq!(classify_instruction("#### Deep", 1).kind, InstructionType::Step);
        assert_eq!(classify_instruction("# Shallow", 1).kind, InstructionType::Step);
    }

    #[test]
    fn test_default_step() {
        let entry = classify_instruction("  Preheat the oven to 200°C. ", 4);
        assert_eq!(entry.kind, InstructionType::Step);
        assert_eq!(entry.content, "Preheat the oven to 200°C.");
        assert_eq!(entry.step_number, Some(4));
    }

    #[test]
    fn test_tipping_point_is_a_step() {
        assert_eq!(classify_instruction("Tipping the pan, baste", 1).kind, InstructionType::Step);
    }

    #[test]
    fn test_parse_instructions_numbers_steps() {
        let lines = [
            "## Dough",
            "Mix flour and water",
            "",
            "💡 Use lukewarm water",
            "Knead for 10 minutes",
            "⏱ 60 min: Let it rise",
            "Shape the loaf",
        ];
        let entries = parse_instructions(&lines);

        assert_eq!(entries.len(), 6);
        let steps: Vec<u32> = entries.iter().filter_map(|entry| entry.step_number).collect();
        assert_eq!(steps, vec![1, 2, 3]);
    }

    #[test]
    fn test_serialized_shape() {
        let entry = classify_instruction("⏱ 5 min: Simmer", 1);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "timed");
        assert_eq!(json["time"], 5);
        assert!(json.get("step_number").is_none());
    }
}
