use scout::candidate::CandidateId;

/// Render an id for text output; missing ids show as `(no id)`
pub fn display_id(id: Option<&CandidateId>) -> String {
    id.map(ToString::to_string)
        .unwrap_or_else(|| "(no id)".to_string())
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_id() {
        assert_eq!(display_id(Some(&CandidateId::from("abc"))), "abc");
        assert_eq!(display_id(Some(&CandidateId::from(7))), "7");
        assert_eq!(display_id(None), "(no id)");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_chars("ééééé", 3), "éé…");
    }
}
