//! Speech Synthesis
//!
//! Turns plan text into MP3 audio by calling a Google-Translate-style
//! TTS endpoint. The endpoint caps input length per request, so the
//! text is split into chunks and the returned audio segments are
//! concatenated. MP3 frames are self-contained, so plain byte
//! concatenation plays back as one clip.

use crate::config::SpeechConfig;
use reqwest::Client;
use thiserror::Error;

/// Character cap per synthesis request
const MAX_CHUNK_CHARS: usize = 100;

/// Client for the speech synthesis endpoint
pub struct SpeechSynthesizer {
    client: Client,
    config: SpeechConfig,
}

impl SpeechSynthesizer {
    /// Create a new synthesizer from speech configuration
    pub fn new(config: SpeechConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Synthesize text into a single MP3 byte buffer
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let total = chunks.len();
        let mut audio = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            let url = self.chunk_url(chunk, idx, total);

            let response = self.client.get(&url).send().await.map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout
                } else if e.is_connect() {
                    SpeechError::Unavailable
                } else {
                    SpeechError::Request(e)
                }
            })?;

            if !response.status().is_success() {
                let status = response.status();
                let message = response.text().await.unwrap_or_default();
                return Err(SpeechError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let bytes = response.bytes().await.map_err(SpeechError::Request)?;
            audio.extend_from_slice(&bytes);
        }

        tracing::debug!(
            chunks = total,
            bytes = audio.len(),
            "Synthesized speech audio"
        );

        Ok(audio)
    }

    fn chunk_url(&self, chunk: &str, idx: usize, total: usize) -> String {
        format!(
            "{}/translate_tts?ie=UTF-8&q={}&tl={}&client=tw-ob&total={}&idx={}&textlen={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(chunk),
            urlencoding::encode(&self.config.language),
            total,
            idx,
            chunk.chars().count()
        )
    }
}

/// Split text into synthesis chunks of at most `max_chars` characters
///
/// Splits at sentence boundaries first, then whitespace within long
/// sentences. Only a single word longer than the limit is split
/// mid-word. Whitespace-only input yields no chunks.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();

    for sentence in split_sentences(text) {
        if sentence.chars().count() <= max_chars {
            chunks.push(sentence);
            continue;
        }

        let mut current = String::new();
        for word in sentence
            .split_whitespace()
            .flat_map(|w| split_oversized(w, max_chars))
        {
            if current.is_empty() {
                current = word;
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(&word);
            } else {
                chunks.push(std::mem::take(&mut current));
                current = word;
            }
        }
        if !current.is_empty() {
            chunks.push(current);
        }
    }

    chunks
}

/// Split text at sentence-ending punctuation and line breaks
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch == '\n' {
            push_trimmed(&mut sentences, &mut current);
            continue;
        }
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            push_trimmed(&mut sentences, &mut current);
        }
    }
    push_trimmed(&mut sentences, &mut current);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Break a single word into pieces no longer than `max_chars`
fn split_oversized(word: &str, max_chars: usize) -> Vec<String> {
    if word.chars().count() <= max_chars {
        return vec![word.to_string()];
    }

    word.chars()
        .collect::<Vec<_>>()
        .chunks(max_chars)
        .map(|piece| piece.iter().collect())
        .collect()
}

// ============================================
// Errors
// ============================================

/// Errors from speech synthesis
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Speech service unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Speech API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("No text provided")]
    EmptyText,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        let chunks = chunk_text("Drink more water.", 100);
        assert_eq!(chunks, vec!["Drink more water."]);
    }

    #[test]
    fn test_sentences_chunk_separately() {
        let chunks = chunk_text("First sentence. Second sentence! Third?", 100);
        assert_eq!(
            chunks,
            vec!["First sentence.", "Second sentence!", "Third?"]
        );
    }

    #[test]
    fn test_newlines_split_chunks() {
        let chunks = chunk_text("Daily Caloric Needs:\n- BMR: 1649 calories\n- TDEE: 2556 calories", 100);
        assert_eq!(
            chunks,
            vec![
                "Daily Caloric Needs:",
                "- BMR: 1649 calories",
                "- TDEE: 2556 calories"
            ]
        );
    }

    #[test]
    fn test_long_sentence_splits_at_whitespace() {
        let text = "one two three four five six seven eight nine ten";
        let chunks = chunk_text(text, 20);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 20);
            // No chunk starts or ends mid-word
            assert!(!chunk.starts_with(' ') && !chunk.ends_with(' '));
        }
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn test_oversized_word_splits_mid_word() {
        let chunks = chunk_text("supercalifragilistic", 5);
        assert_eq!(chunks, vec!["super", "calif", "ragil", "istic"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(chunk_text("", 100).is_empty());
        assert!(chunk_text("   \n  \n", 100).is_empty());
    }

    #[test]
    fn test_chunk_url_encodes_query() {
        let synth = SpeechSynthesizer::new(SpeechConfig::default());
        let url = synth.chunk_url("Protein: 154g", 0, 2);

        assert!(url.starts_with("https://translate.google.com/translate_tts?"));
        assert!(url.contains("q=Protein%3A%20154g"));
        assert!(url.contains("tl=en"));
        assert!(url.contains("total=2"));
        assert!(url.contains("idx=0"));
        assert!(url.contains("textlen=13"));
    }

    #[test]
    fn test_chunks_never_exceed_limit() {
        let text = "Your Personalized Diet & Fitness Plan. Daily Caloric Needs: \
                    BMR 1649 calories, TDEE 2556 calories, Target 2056 calories. \
                    Macronutrient Breakdown: Protein 154g, Carbohydrates 231g, Fats 57g.";
        for chunk in chunk_text(text, MAX_CHUNK_CHARS) {
            assert!(chunk.chars().count() <= MAX_CHUNK_CHARS);
        }
    }
}
