use serde::{Deserialize, Serialize};

/// Canonical word lookup, independent of the raw payload shape it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub word: String,
    pub phonetic: Option<String>,
    /// Pronunciation audio URL
    pub audio: Option<String>,
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionEntry {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub id: String,
    pub thumbnail_url: String,
    pub full_url: String,
    pub alt_text: Option<String>,
}

/// Definitions sharing one part of speech, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartOfSpeechGroup {
    pub part_of_speech: String,
    pub entries: Vec<DefinitionEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Validation,
    Offline,
    NotFound,
    RateLimited,
    Unauthorized,
    ServerError,
    NetworkUnreachable,
    MalformedResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LookupState {
    #[default]
    Idle,
    Validating,
    Loading {
        keyword: String,
    },
    Success {
        result: LookupResult,
        images: Option<Vec<ImageResult>>,
    },
    Failure {
        kind: ErrorKind,
        message: String,
    },
}

impl LookupState {
    pub fn is_idle(&self) -> bool {
        matches!(self, LookupState::Idle)
    }
}

/// What readers of the controller observe
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    /// Token of the submit (or clear) that produced `state`
    pub generation: u64,
    pub state: LookupState,
    /// No further transition can arrive for this generation
    pub settled: bool,
}

/// Commands the presentation layer may send to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Clear,
    Shutdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_result_serializes_with_raw_field_names() {
        let result = LookupResult {
            word: "run".to_string(),
            phonetic: None,
            audio: None,
            meanings: vec![Meaning {
                part_of_speech: "verb".to_string(),
                definitions: vec![],
            }],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["meanings"][0]["partOfSpeech"], "verb");
        assert!(json["phonetic"].is_null());
    }

    #[test]
    fn state_is_tagged() {
        let json = serde_json::to_value(LookupState::Loading {
            keyword: "cat".to_string(),
        })
        .unwrap();
        assert_eq!(json["state"], "loading");
        assert_eq!(json["keyword"], "cat");
    }
}
