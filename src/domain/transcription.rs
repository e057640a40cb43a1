use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTimestamp {
    pub word: String,
    pub start: f32,
    pub end: f32,
}

impl WordTimestamp {
    pub fn new(word: impl Into<String>, start: f32, end: f32) -> Self {
        Self {
            word: word.into(),
            start,
            end,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub words: Vec<WordTimestamp>,
}

impl TranscriptionResult {
    /// Builds a result from raw engine output.
    ///
    /// Missing fields become empty, words with `end < start` are dropped and
    /// the remainder is ordered by start time.
    pub fn from_engine_output(text: Option<String>, words: Option<Vec<WordTimestamp>>) -> Self {
        let mut words: Vec<WordTimestamp> = words
            .unwrap_or_default()
            .into_iter()
            .filter(|w| {
                let keep = w.is_well_formed();
                if !keep {
                    tracing::warn!(
                        word = %w.word,
                        start = w.start,
                        end = w.end,
                        "Dropping word with inverted timestamps"
                    );
                }
                keep
            })
            .collect();

        words.sort_by(|a, b| a.start.total_cmp(&b.start));

        Self {
            text: text.unwrap_or_default(),
            words,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.words.is_empty()
    }
}
