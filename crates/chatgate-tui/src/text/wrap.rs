//! Word wrapping for plain text.

/// Wrap a plain text string to the specified width.
///
/// Explicit newlines are kept as paragraph breaks.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("plans trips around the world", 12);
        assert_eq!(lines, vec!["plans trips", "around the", "world"]);
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        let lines = wrap_text("one\ntwo", 20);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap_text("text", 0), vec!["text"]);
    }
}
