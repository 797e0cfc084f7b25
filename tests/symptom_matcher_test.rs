use clinic_site::{match_symptoms, Specialist, SymptomReport};
use proptest::prelude::*;
use proptest::test_runner::Config;

const HEADACHE: &str = "Possible Migraine or Tension Headache";
const FALLBACK: &str = "Unable to determine specific condition";

#[test]
fn test_headache_beats_fever() {
    let rec = match_symptoms(&SymptomReport::new("Headache and a high FEVER"));
    assert_eq!(rec.condition, HEADACHE);
    assert_eq!(rec.specialist, Specialist::Neurologist);
}

#[test]
fn test_empty_input_falls_back() {
    let rec = match_symptoms(&SymptomReport::new(""));
    assert_eq!(rec.condition, FALLBACK);
    assert_eq!(rec.specialist, Specialist::GeneralPhysician);
}

#[test]
fn test_cough_example() {
    let rec = match_symptoms(&SymptomReport::new("I have a bad COUGH and feel tired"));
    assert_eq!(rec.condition, "Common Cold or Bronchitis");
    assert_eq!(rec.specialist, Specialist::Pulmonologist);
    assert_eq!(rec.medicines, vec!["Cough Syrup", "Throat Lozenges"]);
}

#[test]
fn test_no_symptoms_example() {
    let rec = match_symptoms(&SymptomReport::new("no symptoms at all"));
    assert_eq!(rec.condition, FALLBACK);
    assert_eq!(rec.specialist.label(), "General Physician");
}

fn mixed_case(word: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn any_text_yields_a_recommendation(text in any::<String>()) {
        let rec = match_symptoms(&SymptomReport::new(text));
        prop_assert!(!rec.condition.is_empty());
        prop_assert!(!rec.medicines.is_empty());
    }

    #[test]
    fn matching_is_deterministic(text in "\\PC{0,64}") {
        let report = SymptomReport::new(text);
        prop_assert_eq!(match_symptoms(&report), match_symptoms(&report));
    }

    #[test]
    fn headache_trigger_wins_anywhere(
        prefix in "\\PC{0,32}",
        suffix in "\\PC{0,32}",
        trigger in prop_oneof![mixed_case("headache"), mixed_case("migraine")],
    ) {
        let text = format!("{prefix}{trigger}{suffix}");
        let rec = match_symptoms(&SymptomReport::new(text));
        prop_assert_eq!(rec.condition.as_str(), HEADACHE);
        prop_assert_eq!(rec.specialist, Specialist::Neurologist);
    }

    #[test]
    fn text_without_triggers_falls_back(text in "[abdijkpqstvwxyz ]{0,48}") {
        // None of the trigger words can be spelled from this alphabet.
        let rec = match_symptoms(&SymptomReport::new(text));
        prop_assert_eq!(rec.condition.as_str(), FALLBACK);
    }
}
