//! crates/interrogation_core/src/transcript.rs
//!
//! The loaded transcript: raw lines in export order plus a speaker frequency table.

use crate::grammar::split_line;
use crate::ports::{Diagnostic, DiagnosticSink, LoadResult, TranscriptSource};
use crate::speaker::bare_name;
use std::collections::BTreeMap;

/// An immutable, ordered sequence of raw transcript lines (earliest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
    speakers: BTreeMap<String, usize>,
}

/// A distinct speaker and how many lines they spoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerCount {
    pub name: String,
    pub count: usize,
}

impl SpeakerCount {
    /// The text shown in participant pickers, e.g. `John Doe (12)`.
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.count)
    }
}

impl Transcript {
    /// Builds a transcript from text, one record per line. Line terminators
    /// (`\n` or `\r\n`) are stripped; nothing else is.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();

        let mut speakers = BTreeMap::new();
        for line in &lines {
            if let Some(name) = bare_name(speaker_scan_text(line)) {
                *speakers.entry(name).or_insert(0) += 1;
            }
        }

        Self { lines, speakers }
    }

    /// Reads a whole source. No partial transcript is produced on failure.
    pub async fn load(
        source: &dyn TranscriptSource,
        sink: &dyn DiagnosticSink,
    ) -> LoadResult<Self> {
        let text = match source.read_text().await {
            Ok(text) => text,
            Err(error) => {
                sink.record(Diagnostic::LoadFailed {
                    source: source.describe(),
                    error: error.clone(),
                });
                return Err(error);
            }
        };

        let transcript = Self::from_text(&text);
        sink.record(Diagnostic::TranscriptLoaded {
            source: source.describe(),
            lines: transcript.len(),
            speakers: transcript.speakers.len(),
        });
        Ok(transcript)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Occurrence count of one speaker, 0 if unknown.
    pub fn speaker_count(&self, name: &str) -> usize {
        self.speakers.get(name).copied().unwrap_or(0)
    }

    /// Distinct speakers, most frequent first; ties are ordered by name.
    pub fn speakers(&self) -> Vec<SpeakerCount> {
        let mut roster: Vec<SpeakerCount> = self
            .speakers
            .iter()
            .map(|(name, count)| SpeakerCount {
                name: name.clone(),
                count: *count,
            })
            .collect();
        // BTreeMap iteration is already name-ordered and the sort is stable.
        roster.sort_by(|a, b| b.count.cmp(&a.count));
        roster
    }
}

// The message part of a well-formed line, or the whole line otherwise.
fn speaker_scan_text(line: &str) -> &str {
    split_line(line).map_or(line, |parts| parts.message.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{LoadError, NullSink};
    use async_trait::async_trait;
    use std::sync::Mutex;

    const SAMPLE: &str = "\
[2.02.2025 22:19:38] [Czat IC] Howard Goldberg mówi: Na glebe.\r
[2.02.2025 22:19:40] [Czat IC] John Doe mówi (radio): 10-4.
[2.02.2025 22:19:41] [Komenda] /cuff 12
John Doe mówi: spoken on a broken line
[2.02.2025 22:19:45] [Czat IC] Howard Goldberg szepcze do John Doe: cicho
";

    struct StaticSource(LoadResult<String>);

    #[async_trait]
    impl TranscriptSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        async fn read_text(&self) -> LoadResult<String> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<Diagnostic>>);

    impl DiagnosticSink for RecordingSink {
        fn record(&self, event: Diagnostic) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn lines_keep_order_and_drop_terminators() {
        let t = Transcript::from_text(SAMPLE);
        assert_eq!(t.len(), 5);
        assert_eq!(
            t.lines()[0],
            "[2.02.2025 22:19:38] [Czat IC] Howard Goldberg mówi: Na glebe."
        );
        assert_eq!(t.lines()[3], "John Doe mówi: spoken on a broken line");
    }

    #[test]
    fn speakers_counted_even_on_unparsed_lines() {
        let t = Transcript::from_text(SAMPLE);
        assert_eq!(t.speaker_count("Howard Goldberg"), 2);
        assert_eq!(t.speaker_count("John Doe"), 2);
        assert_eq!(t.speaker_count("Nobody"), 0);
        let roster = t.speakers();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].display(), "Howard Goldberg (2)");
        assert_eq!(roster[1].name, "John Doe");
    }

    #[test]
    fn roster_sorted_by_frequency() {
        let t = Transcript::from_text(
            "[1.1.2025 10:00:00] [Czat IC] Zofia Lis mówi: a\n\
             [1.1.2025 10:00:01] [Czat IC] Zofia Lis mówi: b\n\
             [1.1.2025 10:00:02] [Czat IC] Adam Kot mówi: c\n",
        );
        let names: Vec<String> = t.speakers().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Zofia Lis", "Adam Kot"]);
    }

    #[test]
    fn empty_source_is_valid() {
        let t = Transcript::from_text("");
        assert!(t.is_empty());
        assert!(t.speakers().is_empty());
    }

    #[tokio::test]
    async fn load_reports_success() {
        let sink = RecordingSink::default();
        let source = StaticSource(Ok(SAMPLE.to_string()));
        let t = Transcript::load(&source, &sink).await.unwrap();
        assert_eq!(t.len(), 5);
        assert_eq!(
            sink.0.lock().unwrap().as_slice(),
            [Diagnostic::TranscriptLoaded {
                source: "static".to_string(),
                lines: 5,
                speakers: 2,
            }]
        );
    }

    #[tokio::test]
    async fn load_failure_is_terminal() {
        let source = StaticSource(Err(LoadError::NotFound("missing.txt".to_string())));
        let err = Transcript::load(&source, &NullSink).await.unwrap_err();
        assert_eq!(err, LoadError::NotFound("missing.txt".to_string()));
    }
}
