use unicode_segmentation::UnicodeSegmentation;

/// Default token budget per chunk handed to the LLM
pub const DEFAULT_MAX_TOKEN_LIMIT: usize = 32_000;

/// Rough estimate: 1.3 tokens per word
pub fn estimate_tokens(text: &str) -> usize {
    let word_count = text.unicode_words().count();
    tokens_for_words(word_count)
}

fn tokens_for_words(word_count: usize) -> usize {
    (word_count as f64 * 1.3) as usize
}

/// Split text into ordered chunks whose estimated token count stays within `limit`.
///
/// Text that fits is returned as a single chunk, so callers can always rely on
/// a first chunk being present (even for empty input). Splits only happen on
/// word boundaries; a chunk never ends in the middle of a word.
pub fn split_text_by_token_limit(text: &str, limit: usize) -> Vec<String> {
    if estimate_tokens(text) <= limit {
        return vec![text.trim().to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_words = 0;

    for segment in text.split_word_bounds() {
        let is_word = segment.unicode_words().next().is_some();

        if is_word && current_words > 0 && tokens_for_words(current_words + 1) > limit {
            push_chunk(&mut chunks, &current);
            current.clear();
            current_words = 0;
        }

        current.push_str(segment);
        if is_word {
            current_words += 1;
        }
    }
    push_chunk(&mut chunks, &current);

    if chunks.is_empty() {
        chunks.push(String::new());
    }

    chunks
}

fn push_chunk(chunks: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

/// Token-limit policy shared by all extractors of one pipeline.
#[derive(Debug, Clone, Copy)]
pub struct TokenSplitter {
    pub max_token_limit: usize,
}

impl Default for TokenSplitter {
    fn default() -> Self {
        Self {
            max_token_limit: DEFAULT_MAX_TOKEN_LIMIT,
        }
    }
}

impl TokenSplitter {
    pub fn new(max_token_limit: usize) -> Self {
        Self { max_token_limit }
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        split_text_by_token_limit(text, self.max_token_limit)
    }
}
