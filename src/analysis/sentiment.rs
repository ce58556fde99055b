//! Per-message sentiment classification.
//!
//! A [`PolarityScorer`] turns a body into a polarity in `[-1, 1]`; the
//! reducer buckets each selected record as positive (`> 0`), neutral (`== 0`)
//! or negative (`< 0`). The default scorer is [`LexiconScorer`] built from
//! the lexicon bundled with the crate.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::filter::UserFilter;
use crate::record::Record;

const BUNDLED_LEXICON: &str = include_str!("../../resources/sentiment_lexicon.txt");

static DEFAULT_SCORER: LazyLock<LexiconScorer> =
    LazyLock::new(|| LexiconScorer::from_text(BUNDLED_LEXICON));

/// Scores the polarity of a piece of text.
pub trait PolarityScorer {
    /// Returns a polarity in `[-1, 1]`; `0.0` when nothing is recognized.
    fn polarity(&self, text: &str) -> f64;
}

impl<F: Fn(&str) -> f64> PolarityScorer for F {
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Word-list scorer.
///
/// Each recognized word contributes its score; the polarity is the mean of
/// the contributions. A negator (`not`, `never`, ...) multiplies the next
/// scored word by `-0.5` and an intensifier (`very`, ...) scales it. Both
/// are forgotten at clause punctuation.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    negators: HashSet<String>,
    intensifiers: HashMap<String, f64>,
}

impl LexiconScorer {
    /// Parses a lexicon: `word score` lines, `!word` negators and
    /// `+word factor` intensifiers. `#` starts a comment line; malformed
    /// lines are skipped.
    pub fn from_text(text: &str) -> Self {
        let mut scorer = Self::default();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(word) = line.strip_prefix('!') {
                scorer.negators.insert(word.to_lowercase());
                continue;
            }
            let (entry, is_intensifier) = match line.strip_prefix('+') {
                Some(rest) => (rest, true),
                None => (line, false),
            };
            let parsed = entry
                .rsplit_once(char::is_whitespace)
                .and_then(|(word, value)| Some((word.trim().to_lowercase(), value.parse::<f64>().ok()?)));
            match parsed {
                Some((word, value)) if is_intensifier => {
                    scorer.intensifiers.insert(word, value);
                }
                Some((word, value)) => {
                    scorer.words.insert(word, value.clamp(-1.0, 1.0));
                }
                None => debug!(line = idx + 1, "skipping malformed lexicon line"),
            }
        }
        scorer
    }

    /// The scorer built from the bundled lexicon.
    pub fn bundled() -> &'static LexiconScorer {
        &DEFAULT_SCORER
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn ends_clause(token: &str) -> bool {
    token.ends_with(['.', '!', '?', ',', ';'])
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut scores = Vec::new();
        let mut negate = false;
        let mut intensity = 1.0;

        for raw in text.split_whitespace() {
            let token = raw.to_lowercase();
            let score = match self.words.get(&token) {
                Some(&score) => Some(score),
                None => {
                    let word = token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
                    if self.negators.contains(word) {
                        negate = true;
                        None
                    } else if let Some(&factor) = self.intensifiers.get(word) {
                        intensity *= factor;
                        None
                    } else {
                        self.words.get(word).copied()
                    }
                }
            };

            if let Some(score) = score {
                let mut value = score * intensity;
                if negate {
                    value *= -0.5;
                }
                scores.push(value.clamp(-1.0, 1.0));
                negate = false;
                intensity = 1.0;
            } else if ends_clause(raw) {
                negate = false;
                intensity = 1.0;
            }
        }

        if scores.is_empty() {
            return 0.0;
        }
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Sentiment bucket of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buckets a polarity: `> 0` positive, `== 0` neutral, `< 0` negative.
pub fn classify(polarity: f64) -> Sentiment {
    if polarity > 0.0 {
        Sentiment::Positive
    } else if polarity < 0.0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Number of messages in each bucket. All three are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
}

impl SentimentCounts {
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    fn bump(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    /// Buckets in `Positive, Neutral, Negative` order.
    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, usize)> + '_ {
        Sentiment::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Classifies every selected record with the bundled lexicon.
pub fn sentiment_analysis(user: &UserFilter, records: &[Record]) -> SentimentCounts {
    sentiment_analysis_with(user, records, LexiconScorer::bundled())
}

/// Classifies every selected record with a custom scorer.
pub fn sentiment_analysis_with<S>(user: &UserFilter, records: &[Record], scorer: &S) -> SentimentCounts
where
    S: PolarityScorer + ?Sized,
{
    user.iter(records).fold(SentimentCounts::default(), |mut counts, record| {
        counts.bump(classify(scorer.polarity(&record.body)));
        counts
    })
}
