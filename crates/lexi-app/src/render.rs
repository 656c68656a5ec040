use std::fmt::Write;

use lexi_core::present;
use lexi_types::{DefinitionEntry, ImageResult, LookupResult, LookupState};
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub color: bool,
    /// Mention the prompt's `:clear` command in failure hints
    pub interactive: bool,
}

/// Format a lookup state for the terminal
pub fn render(state: &LookupState, options: RenderOptions) -> String {
    let paint = Painter(options.color);

    match state {
        LookupState::Idle | LookupState::Validating => String::new(),
        LookupState::Loading { keyword } => paint.dim(&format!("Looking up \"{keyword}\"...")),
        LookupState::Success { result, images } => {
            let mut out = render_result(result, paint);
            if let Some(images) = images.as_deref().filter(|images| !images.is_empty()) {
                render_images(&mut out, images, paint);
            }
            out
        }
        LookupState::Failure { message, .. } => {
            let hint = if options.interactive {
                "Try another word, or type :clear to start over."
            } else {
                "Please try again."
            };
            format!("{}\n{}", paint.error(message), paint.dim(hint))
        }
    }
}

fn render_result(result: &LookupResult, paint: Painter) -> String {
    let mut out = String::new();

    let _ = write!(out, "{}", paint.title(&result.word));
    if let Some(phonetic) = &result.phonetic {
        let _ = write!(out, "  {}", paint.dim(&format!("/{}/", phonetic.trim_matches('/'))));
    }
    out.push('\n');
    if let Some(audio) = &result.audio {
        let _ = writeln!(out, "Listen: {audio}");
    }

    let total: usize = result.meanings.iter().map(|m| m.definitions.len()).sum();
    let _ = writeln!(out, "{}", paint.dim(&plural(total, "definition")));

    if total == 0 {
        let _ = writeln!(out, "\nNo meanings found for this word.");
        return out;
    }

    let _ = writeln!(out, "\n{}", paint.heading("All definitions"));
    let mut index = 0;
    for meaning in &result.meanings {
        for entry in &meaning.definitions {
            index += 1;
            let label = format!("[{}]", meaning.part_of_speech);
            render_entry(&mut out, index, Some(&label), entry, paint);
        }
    }

    let groups = present(result);
    if groups.len() > 1 {
        let _ = writeln!(out, "\n{}", paint.heading("By part of speech"));
        for group in &groups {
            let _ = writeln!(
                out,
                "  {} {}",
                paint.accent(&capitalize(&group.part_of_speech)),
                paint.dim(&format!("({})", plural(group.entries.len(), "definition")))
            );
            for (i, entry) in group.entries.iter().enumerate() {
                render_entry(&mut out, i + 1, None, entry, paint);
            }
        }
    }

    out
}

fn render_entry(
    out: &mut String,
    index: usize,
    label: Option<&str>,
    entry: &DefinitionEntry,
    paint: Painter,
) {
    match label {
        Some(label) => {
            let _ = writeln!(out, "  {index}. {} {}", paint.accent(label), entry.definition);
        }
        None => {
            let _ = writeln!(out, "    {index}. {}", entry.definition);
        }
    }

    let indent = if label.is_some() { "     " } else { "       " };
    if let Some(example) = &entry.example {
        let _ = writeln!(out, "{indent}{}", paint.dim(&format!("Example: \"{example}\"")));
    }
    if !entry.synonyms.is_empty() {
        let _ = writeln!(out, "{indent}Synonyms: {}", entry.synonyms.join(", "));
    }
    if !entry.antonyms.is_empty() {
        let _ = writeln!(out, "{indent}Antonyms: {}", entry.antonyms.join(", "));
    }
}

fn render_images(out: &mut String, images: &[ImageResult], paint: Painter) {
    let _ = writeln!(out, "\n{}", paint.heading("Related images"));
    for (i, image) in images.iter().enumerate() {
        let alt = image
            .alt_text
            .clone()
            .unwrap_or_else(|| format!("Related image {}", i + 1));
        let _ = writeln!(out, "  - {alt}");
        let _ = writeln!(out, "    {}", paint.dim(&image.full_url));
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Clone, Copy)]
struct Painter(bool);

impl Painter {
    fn title(&self, text: &str) -> String {
        if self.0 { text.bold().to_string() } else { text.to_string() }
    }

    fn heading(&self, text: &str) -> String {
        if self.0 { text.bold().blue().to_string() } else { text.to_string() }
    }

    fn accent(&self, text: &str) -> String {
        if self.0 { text.green().to_string() } else { text.to_string() }
    }

    fn dim(&self, text: &str) -> String {
        if self.0 { text.dimmed().to_string() } else { text.to_string() }
    }

    fn error(&self, text: &str) -> String {
        if self.0 { text.red().to_string() } else { text.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use lexi_types::{ErrorKind, Meaning};

    use super::*;

    const PLAIN: RenderOptions = RenderOptions {
        color: false,
        interactive: true,
    };

    fn entry(definition: &str) -> DefinitionEntry {
        DefinitionEntry {
            definition: definition.to_string(),
            example: None,
            synonyms: vec![],
            antonyms: vec![],
        }
    }

    fn success(meanings: Vec<Meaning>, images: Option<Vec<ImageResult>>) -> LookupState {
        LookupState::Success {
            result: LookupResult {
                word: "run".to_string(),
                phonetic: Some("rʌn".to_string()),
                audio: None,
                meanings,
            },
            images,
        }
    }

    #[test]
    fn empty_meanings_are_not_an_error() {
        let out = render(&success(vec![], None), PLAIN);
        assert!(out.contains("run  /rʌn/"));
        assert!(out.contains("0 definitions"));
        assert!(out.contains("No meanings found for this word."));
    }

    #[test]
    fn single_group_skips_grouped_section() {
        let mut first = entry("to move fast");
        first.example = Some("She ran home.".to_string());
        first.synonyms = vec!["sprint".to_string()];

        let out = render(
            &success(
                vec![Meaning {
                    part_of_speech: "verb".to_string(),
                    definitions: vec![first],
                }],
                None,
            ),
            PLAIN,
        );

        assert!(out.contains("1 definition\n"));
        assert!(out.contains("  1. [verb] to move fast"));
        assert!(out.contains("Example: \"She ran home.\""));
        assert!(out.contains("Synonyms: sprint"));
        assert!(!out.contains("Antonyms"));
        assert!(!out.contains("By part of speech"));
    }

    #[test]
    fn grouped_section_in_canonical_order() {
        let out = render(
            &success(
                vec![
                    Meaning {
                        part_of_speech: "verb".to_string(),
                        definitions: vec![entry("to move fast")],
                    },
                    Meaning {
                        part_of_speech: "noun".to_string(),
                        definitions: vec![entry("an act of running"), entry("a journey")],
                    },
                ],
                Some(vec![]),
            ),
            PLAIN,
        );

        let grouped = &out[out.find("By part of speech").unwrap()..];
        let noun = grouped.find("Noun (2 definitions)").unwrap();
        let verb = grouped.find("Verb (1 definition)").unwrap();
        assert!(noun < verb);
        assert!(!out.contains("Related images"));
    }

    #[test]
    fn images_listed_with_fallback_alt() {
        let images = vec![ImageResult {
            id: "1".to_string(),
            thumbnail_url: "https://images.example/1-small.jpg".to_string(),
            full_url: "https://images.example/1.jpg".to_string(),
            alt_text: None,
        }];

        let out = render(&success(vec![], Some(images)), PLAIN);
        assert!(out.contains("Related images"));
        assert!(out.contains("Related image 1"));
        assert!(out.contains("https://images.example/1.jpg"));
    }

    #[test]
    fn failure_shows_message_and_hint() {
        let state = LookupState::Failure {
            kind: ErrorKind::NotFound,
            message: "Sorry, we couldn't find a definition for that word.".to_string(),
        };

        let out = render(&state, PLAIN);
        assert!(out.starts_with("Sorry, we couldn't find"));
        assert!(out.contains(":clear"));

        let one_shot = RenderOptions {
            interactive: false,
            ..PLAIN
        };
        assert!(!render(&state, one_shot).contains(":clear"));
    }

    #[test]
    fn idle_renders_nothing() {
        assert!(render(&LookupState::Idle, PLAIN).is_empty());
    }
}
