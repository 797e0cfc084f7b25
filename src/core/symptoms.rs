//! Keyword-based symptom matcher.
//!
//! The input is lowercased and checked against an ordered rule table. The first
//! rule with any trigger contained in the text wins; text matching no rule gets
//! the "consult a doctor" fallback. Rule order is the only precedence there is,
//! so "headache and fever" resolves to the headache rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-text description of symptoms as typed by a visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomReport(String);

impl SymptomReport {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SymptomReport {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SymptomReport {
    fn from(text: String) -> Self {
        Self(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialist {
    #[serde(rename = "Neurologist")]
    Neurologist,
    #[serde(rename = "General Physician")]
    GeneralPhysician,
    #[serde(rename = "Pulmonologist")]
    Pulmonologist,
}

impl Specialist {
    pub fn label(self) -> &'static str {
        match self {
            Specialist::Neurologist => "Neurologist",
            Specialist::GeneralPhysician => "General Physician",
            Specialist::Pulmonologist => "Pulmonologist",
        }
    }
}

impl fmt::Display for Specialist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub condition: String,
    pub medicines: Vec<String>,
    pub specialist: Specialist,
}

struct Rule {
    triggers: &'static [&'static str],
    condition: &'static str,
    medicines: &'static [&'static str],
    specialist: Specialist,
}

impl Rule {
    fn matches(&self, folded: &str) -> bool {
        self.triggers.iter().any(|trigger| folded.contains(trigger))
    }

    fn recommendation(&self) -> Recommendation {
        Recommendation {
            condition: self.condition.to_string(),
            medicines: self.medicines.iter().map(|m| m.to_string()).collect(),
            specialist: self.specialist,
        }
    }
}

// Evaluated top to bottom.
const RULES: &[Rule] = &[
    Rule {
        triggers: &["headache", "migraine"],
        condition: "Possible Migraine or Tension Headache",
        medicines: &["Paracetamol", "Ibuprofen"],
        specialist: Specialist::Neurologist,
    },
    Rule {
        triggers: &["fever", "cold"],
        condition: "Common Cold or Flu",
        medicines: &["Paracetamol", "Vitamin C", "Cold Relief Tablets"],
        specialist: Specialist::GeneralPhysician,
    },
    Rule {
        triggers: &["cough"],
        condition: "Common Cold or Bronchitis",
        medicines: &["Cough Syrup", "Throat Lozenges"],
        specialist: Specialist::Pulmonologist,
    },
];

const FALLBACK: Rule = Rule {
    triggers: &[],
    condition: "Unable to determine specific condition",
    medicines: &["Please consult a doctor for proper diagnosis"],
    specialist: Specialist::GeneralPhysician,
};

/// Maps a symptom description to a canned recommendation. Total over all input.
pub fn match_symptoms(report: &SymptomReport) -> Recommendation {
    let folded = report.as_str().to_lowercase();

    let rule = RULES
        .iter()
        .find(|rule| rule.matches(&folded))
        .unwrap_or(&FALLBACK);

    tracing::debug!(
        specialist = %rule.specialist,
        fallback = rule.triggers.is_empty(),
        "matched symptom report"
    );

    rule.recommendation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headache_rule() {
        let rec = match_symptoms(&"Terrible Migraine since morning".into());
        assert_eq!(rec.condition, "Possible Migraine or Tension Headache");
        assert_eq!(rec.medicines, vec!["Paracetamol", "Ibuprofen"]);
        assert_eq!(rec.specialist, Specialist::Neurologist);
    }

    #[test]
    fn test_headache_shadows_fever() {
        let rec = match_symptoms(&"fever with a pounding headache".into());
        assert_eq!(rec.specialist, Specialist::Neurologist);
    }

    #[test]
    fn test_fever_shadows_cough() {
        let rec = match_symptoms(&"cough and a cold".into());
        assert_eq!(rec.condition, "Common Cold or Flu");
        assert_eq!(rec.medicines.len(), 3);
    }

    #[test]
    fn test_cough_rule_is_case_insensitive() {
        let rec = match_symptoms(&"I have a bad COUGH and feel tired".into());
        assert_eq!(rec.condition, "Common Cold or Bronchitis");
        assert_eq!(rec.specialist, Specialist::Pulmonologist);
    }

    #[test]
    fn test_substring_match_is_literal() {
        // "colder" contains "cold"
        let rec = match_symptoms(&"my hands feel colder than usual".into());
        assert_eq!(rec.condition, "Common Cold or Flu");
    }

    #[test]
    fn test_fallback() {
        for text in ["", "no symptoms at all", "Überkeit und Schwindel"] {
            let rec = match_symptoms(&text.into());
            assert_eq!(rec.condition, "Unable to determine specific condition");
            assert_eq!(
                rec.medicines,
                vec!["Please consult a doctor for proper diagnosis"]
            );
            assert_eq!(rec.specialist, Specialist::GeneralPhysician);
        }
    }

    #[test]
    fn test_specialist_serializes_as_label() {
        let rec = match_symptoms(&"fever".into());
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["specialist"], "General Physician");
        assert_eq!(value["medicines"][1], "Vitamin C");
    }
}
