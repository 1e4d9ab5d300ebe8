//! crates/interrogation_core/src/speaker.rs
//!
//! Recognizes the leading speaker clause of a chat message, e.g.
//! `Howard Goldberg mówi:` or `John Doe szepcze (radio) do Jane Smith:`.

use regex::Regex;
use std::sync::LazyLock;

/// Lower-cased parenthetical marker that flags an in-fiction radio call.
pub const RADIO_MARKER: &str = "radio";

static SPEAKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[A-ZĄĆĘŁŃÓŚŹŻ][\p{L}\s\-']*?)\s+(?P<tone>mówi|szepcze|krzyczy)(?:\s*\((?P<extra>[^)]*)\))?(?:\s+do\s+(?P<addressee>[A-ZĄĆĘŁŃÓŚŹŻ][\p{L}\s\-']*?))?:",
    )
    .expect("speaker pattern is a valid regex")
});

// Name only: stops right after the verb, whatever follows it. Looser than the full
// clause, so a line like `Jan Kos mówi do ciebie: ...` still counts toward the
// speaker roster while carrying no speaker clause.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[A-ZĄĆĘŁŃÓŚŹŻ][\p{L}\s\-']*?)\s+(?:mówi|szepcze|krzyczy)(?:\s*\(|\s+do\s|:)",
    )
    .expect("name pattern is a valid regex")
});

/// The speech-act verb of a speaker clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Says,
    Whispers,
    Shouts,
}

impl Tone {
    fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "mówi" => Some(Tone::Says),
            "szepcze" => Some(Tone::Whispers),
            "krzyczy" => Some(Tone::Shouts),
            _ => None,
        }
    }
}

/// A speaker clause found at the start of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerMatch {
    /// The whole matched clause, colon included.
    pub clause: String,
    pub name: String,
    pub tone: Tone,
    pub extra: Option<String>,
    pub addressee: Option<String>,
    pub is_radio: bool,
    /// The message with the clause removed.
    pub remainder: String,
}

/// Matches a leading speaker clause. `None` is the ordinary case for commands,
/// private messages and narrated actions.
pub fn extract_speaker(message: &str) -> Option<SpeakerMatch> {
    let caps = SPEAKER_PATTERN.captures(message)?;
    let whole = caps.get(0)?;
    let tone = Tone::from_verb(caps.name("tone")?.as_str())?;
    let extra = caps.name("extra").map(|m| m.as_str().trim().to_string());
    let is_radio = extra
        .as_deref()
        .is_some_and(|e| e.to_lowercase() == RADIO_MARKER);

    Some(SpeakerMatch {
        clause: whole.as_str().trim().to_string(),
        name: caps.name("name")?.as_str().trim().to_string(),
        tone,
        extra,
        addressee: caps.name("addressee").map(|m| m.as_str().trim().to_string()),
        is_radio,
        remainder: message[whole.end()..].trim().to_string(),
    })
}

/// Splits a message into `(speaker_clause, is_radio, message)`.
///
/// Without a speaker clause the message comes back unchanged.
pub fn split_speaker(message: &str) -> (String, bool, String) {
    match extract_speaker(message) {
        Some(found) => (found.clause, found.is_radio, found.remainder),
        None => (String::new(), false, message.to_string()),
    }
}

/// Extracts only the speaker's name from text starting with a speaker clause.
pub fn bare_name(text: &str) -> Option<String> {
    NAME_PATTERN
        .captures(text)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_speech() {
        let found = extract_speaker("John Doe mówi: Hello world!").unwrap();
        assert_eq!(found.clause, "John Doe mówi:");
        assert_eq!(found.name, "John Doe");
        assert_eq!(found.tone, Tone::Says);
        assert!(!found.is_radio);
        assert_eq!(found.remainder, "Hello world!");
    }

    #[test]
    fn radio_call() {
        let (clause, is_radio, message) = split_speaker("Jane Smith mówi (radio): Test message.");
        assert_eq!(clause, "Jane Smith mówi (radio):");
        assert!(is_radio);
        assert_eq!(message, "Test message.");
    }

    #[test]
    fn radio_marker_is_case_insensitive_but_exact() {
        assert!(extract_speaker("Jan Kos mówi (Radio): x").unwrap().is_radio);
        let phone = extract_speaker("Jan Kos mówi (telefon): x").unwrap();
        assert!(!phone.is_radio);
        assert_eq!(phone.extra.as_deref(), Some("telefon"));
    }

    #[test]
    fn whisper_with_addressee() {
        let found = extract_speaker("Howard Goldberg szepcze do Mateo Walsh: cicho").unwrap();
        assert_eq!(found.tone, Tone::Whispers);
        assert_eq!(found.name, "Howard Goldberg");
        assert_eq!(found.addressee.as_deref(), Some("Mateo Walsh"));
        assert_eq!(found.clause, "Howard Goldberg szepcze do Mateo Walsh:");
        assert_eq!(found.remainder, "cicho");
    }

    #[test]
    fn accented_and_punctuated_names() {
        let found = extract_speaker("Łukasz O'Neil-Żak krzyczy: Stój!").unwrap();
        assert_eq!(found.name, "Łukasz O'Neil-Żak");
        assert_eq!(found.tone, Tone::Shouts);
    }

    #[test]
    fn no_match_returns_message_unchanged() {
        let (clause, is_radio, message) = split_speaker("This is a random message.");
        assert_eq!(clause, "");
        assert!(!is_radio);
        assert_eq!(message, "This is a random message.");

        assert!(extract_speaker("* Nieznajomy wskazał na Musaeva.").is_none());
        assert!(extract_speaker("john doe mówi: lowercase name").is_none());
    }

    #[test]
    fn bare_name_stops_at_verb() {
        assert_eq!(
            bare_name("John Doe mówi (radio): over").as_deref(),
            Some("John Doe")
        );
        assert_eq!(
            bare_name("Anna Nowak szepcze do Jan Kos: psst").as_deref(),
            Some("Anna Nowak")
        );
        assert_eq!(bare_name("Anna Nowak mówi:").as_deref(), Some("Anna Nowak"));
        assert_eq!(bare_name("Komenda wykonana."), None);
    }

    #[test]
    fn name_matches_where_the_clause_does_not() {
        for text in ["Jan Kos mówi do ciebie: cisza", "Jan Kos mówi (radio: hej"] {
            assert!(extract_speaker(text).is_none(), "{text}");
            assert_eq!(bare_name(text).as_deref(), Some("Jan Kos"), "{text}");
        }
    }
}
