use lexi_types::{DefinitionEntry, LookupResult, Meaning};
use serde_json::{Map, Value};

use crate::error::NormalizationError;

/// Part of speech given to meanings that do not name one
pub const FALLBACK_PART_OF_SPEECH: &str = "other";

/// Reduce any of the definition service's payload shapes to a `LookupResult`.
///
/// Accepted shapes:
/// - the entry object itself, or an array whose first element is the entry
/// - meanings with a nested `definitions` array, or with a single flattened
///   `definition`/`example`/`synonyms`/`antonyms` on the meaning itself
/// - a root `phonetic` string, or only a `phonetics` array of `{text, audio}`
///
/// Never panics; every input yields a result or a typed error.
pub fn normalize(raw: &Value) -> Result<LookupResult, NormalizationError> {
    let entry = match raw {
        Value::Array(items) => items.first().ok_or(NormalizationError::EmptyResponse)?,
        other => other,
    };
    let Some(entry) = entry.as_object() else {
        return Err(NormalizationError::EmptyResponse);
    };

    let meanings: Vec<Meaning> = entry
        .get("meanings")
        .and_then(Value::as_array)
        .map(|raw_meanings| raw_meanings.iter().filter_map(meaning).collect())
        .unwrap_or_default();

    let Some(word) = text(entry.get("word")) else {
        return Err(if meanings.is_empty() {
            NormalizationError::EmptyResponse
        } else {
            NormalizationError::MissingWord
        });
    };

    Ok(LookupResult {
        word,
        phonetic: root_or_phonetics(entry, "phonetic", "text"),
        audio: root_or_phonetics(entry, "audio", "audio"),
        meanings,
    })
}

/// Root-level string first, then the first `phonetics` record carrying `field`
fn root_or_phonetics(entry: &Map<String, Value>, root_key: &str, field: &str) -> Option<String> {
    text(entry.get(root_key)).or_else(|| {
        entry
            .get("phonetics")?
            .as_array()?
            .iter()
            .find_map(|record| text(record.get(field)))
    })
}

fn meaning(raw: &Value) -> Option<Meaning> {
    let fields = raw.as_object()?;

    let part_of_speech = text(fields.get("partOfSpeech"))
        .map(|pos| pos.to_lowercase())
        .unwrap_or_else(|| FALLBACK_PART_OF_SPEECH.to_string());

    let definitions: Vec<DefinitionEntry> = match fields.get("definitions") {
        Some(Value::Array(nested)) => nested.iter().filter_map(definition_entry).collect(),
        _ => definition_entry(raw).into_iter().collect(),
    };

    if definitions.is_empty() {
        return None;
    }

    Some(Meaning {
        part_of_speech,
        definitions,
    })
}

fn definition_entry(raw: &Value) -> Option<DefinitionEntry> {
    let fields = raw.as_object()?;

    Some(DefinitionEntry {
        definition: text(fields.get("definition"))?,
        example: text(fields.get("example")),
        synonyms: word_set(fields.get("synonyms")),
        antonyms: word_set(fields.get("antonyms")),
    })
}

/// Trimmed, non-empty string content
fn text(value: Option<&Value>) -> Option<String> {
    let trimmed = value?.as_str()?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Distinct non-empty strings in first-seen order
fn word_set(value: Option<&Value>) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let Some(items) = value.and_then(Value::as_array) else {
        return words;
    };

    for item in items {
        if let Some(word) = text(Some(item)) {
            if !words.contains(&word) {
                words.push(word);
            }
        }
    }

    words
}
