//! Shared utilities for channel implementations.

/// Telegram's limit on the length of one text message
pub const TELEGRAM_MAX_MESSAGE_LEN: usize = 4096;

/// Split a message into chunks respecting a platform's character limit.
/// Splits on line boundaries; lines exceeding `max_len` are hard-split on
/// character boundaries.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    if text.chars().count() <= max_len {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.lines() {
        let line_len = line.chars().count();
        if current_len + line_len + 1 > max_len {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if line_len > max_len {
                let chars: Vec<char> = line.chars().collect();
                let mut pieces = chars.chunks(max_len).peekable();
                while let Some(piece) = pieces.next() {
                    let piece: String = piece.iter().collect();
                    if pieces.peek().is_some() {
                        chunks.push(piece);
                    } else {
                        current_len = piece.chars().count();
                        current = piece;
                    }
                }
            } else {
                current = line.to_string();
                current_len = line_len;
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
                current_len += 1;
            }
            current.push_str(line);
            current_len += line_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_one_chunk() {
        assert_eq!(split_message("hello", 10), vec!["hello"]);
    }

    #[test]
    fn test_splits_on_lines() {
        let chunks = split_message("aaaa\nbbbb\ncccc", 9);
        assert_eq!(chunks, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_hard_splits_long_line() {
        let chunks = split_message("abcdefghij", 4);
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // Multi-byte bullets must not be cut mid-character
        let text = "• один\n• два\n• три";
        let chunks = split_message(text, 7);
        assert_eq!(chunks, vec!["• один", "• два", "• три"]);
        for chunk in chunks {
            assert!(chunk.chars().count() <= 7);
        }
    }
}
