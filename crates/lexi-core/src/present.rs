use std::cmp::Ordering;

use lexi_types::{LookupResult, PartOfSpeechGroup};

/// Display priority for parts of speech; anything else sorts after, by name
pub const PART_OF_SPEECH_ORDER: [&str; 7] = [
    "noun",
    "verb",
    "adjective",
    "adverb",
    "preposition",
    "conjunction",
    "interjection",
];

/// Group definitions by part of speech in display order.
///
/// Entries keep their order from `result.meanings`; meanings sharing a part of
/// speech are concatenated in the order they were first encountered.
pub fn present(result: &LookupResult) -> Vec<PartOfSpeechGroup> {
    let mut groups: Vec<PartOfSpeechGroup> = Vec::new();

    for meaning in &result.meanings {
        match groups
            .iter_mut()
            .find(|group| group.part_of_speech == meaning.part_of_speech)
        {
            Some(group) => group.entries.extend(meaning.definitions.iter().cloned()),
            None => groups.push(PartOfSpeechGroup {
                part_of_speech: meaning.part_of_speech.clone(),
                entries: meaning.definitions.clone(),
            }),
        }
    }

    groups.sort_by(|a, b| compare_part_of_speech(&a.part_of_speech, &b.part_of_speech));
    groups
}

fn compare_part_of_speech(a: &str, b: &str) -> Ordering {
    let rank = |pos: &str| PART_OF_SPEECH_ORDER.iter().position(|known| *known == pos);

    match (rank(a), rank(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
