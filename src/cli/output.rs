use anyhow::Result;
use multipick::PickOutcome;
use serde_json::json;

/// Print a plain-text representation of the pick outcome: one
/// `value<TAB>label<TAB>image` line per selected choice.
pub(crate) fn print_plain(outcome: &PickOutcome) {
    if !outcome.accepted {
        println!("Cancelled (query: '{}')", outcome.query);
        return;
    }

    for choice in &outcome.selection {
        println!("{}\t{}\t{}", choice.value, choice.label, choice.image);
    }
}

/// Format the pick outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
    let selection: Vec<_> = outcome
        .selection
        .iter()
        .map(|choice| {
            json!({
                "value": choice.value,
                "label": choice.label,
                "image": choice.image,
            })
        })
        .collect();

    let payload = json!({
        "accepted": outcome.accepted,
        "query": outcome.query,
        "selection": selection,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the pick outcome.
pub(crate) fn print_json(outcome: &PickOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use multipick::Choice;
    use serde_json::Value;

    use super::*;

    #[test]
    fn json_format_includes_the_selection() {
        let outcome = PickOutcome {
            accepted: true,
            query: "ric".into(),
            selection: vec![Choice {
                value: 1,
                label: "Rick Sanchez".into(),
                image: "https://example.test/1.jpeg".into(),
            }],
        };

        let json = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["accepted"], true);
        assert_eq!(value["query"], "ric");
        assert_eq!(value["selection"][0]["value"], 1);
        assert_eq!(value["selection"][0]["label"], "Rick Sanchez");
    }

    #[test]
    fn empty_selection_serializes_as_empty_array() {
        let outcome = PickOutcome {
            accepted: true,
            query: String::new(),
            selection: Vec::new(),
        };
        let json = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["selection"], Value::Array(Vec::new()));
    }
}
