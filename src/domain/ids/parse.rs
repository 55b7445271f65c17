use super::EffectiveId;

/// Separator for manual override ID lists.
pub const MANUAL_ID_SEPARATOR: char = ';';

/// Result of parsing a free-form ID list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedIdList {
    pub ids: Vec<i64>,
    /// Tokens that were not integers, in input order.
    pub dropped: Vec<String>,
}

/// Parse `id_sequences` supplied as text.
///
/// Accepts a bracketed list (`[1, 2, 3]`) or integers separated by any run of
/// `;`, `,` or whitespace. Non-integer tokens are dropped, not fatal.
pub fn parse_id_list(raw: &str) -> ParsedIdList {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    let mut parsed = ParsedIdList::default();
    for token in body.split(|c: char| c == ';' || c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        match token.parse::<i64>() {
            Ok(id) => parsed.ids.push(id),
            Err(_) => parsed.dropped.push(token.to_string()),
        }
    }
    parsed
}

/// Parse a manual override list (`1;3;12`).
///
/// Positions are preserved: an entry that is not an integer becomes
/// [`EffectiveId::Invalid`] at its index. A blank list has no entries.
pub fn parse_manual_ids(raw: &str) -> Vec<EffectiveId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed
        .split(MANUAL_ID_SEPARATOR)
        .map(str::trim)
        .map(|entry| match entry.parse::<i64>() {
            Ok(id) => EffectiveId::Id(id),
            Err(_) => EffectiveId::Invalid(entry.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_list_accepts_mixed_separators() {
        let parsed = parse_id_list("1, 2;3\t4\n5");
        assert_eq!(parsed.ids, vec![1, 2, 3, 4, 5]);
        assert!(parsed.dropped.is_empty());
    }

    #[test]
    fn id_list_accepts_bracketed_form() {
        assert_eq!(parse_id_list(" [10, -2, 30] ").ids, vec![10, -2, 30]);
    }

    #[test]
    fn id_list_drops_non_integers() {
        let parsed = parse_id_list("1;x;2.5;3");
        assert_eq!(parsed.ids, vec![1, 3]);
        assert_eq!(parsed.dropped, vec!["x".to_string(), "2.5".to_string()]);
    }

    #[test]
    fn id_list_empty_input() {
        assert_eq!(parse_id_list(""), ParsedIdList::default());
        assert_eq!(parse_id_list("[]"), ParsedIdList::default());
    }

    #[test]
    fn manual_ids_keep_positions() {
        assert_eq!(
            parse_manual_ids("1; x ;3"),
            vec![EffectiveId::Id(1), EffectiveId::Invalid("x".to_string()), EffectiveId::Id(3)]
        );
    }

    #[test]
    fn manual_ids_trailing_separator_is_an_invalid_entry() {
        assert_eq!(
            parse_manual_ids("4;"),
            vec![EffectiveId::Id(4), EffectiveId::Invalid(String::new())]
        );
    }

    #[test]
    fn manual_ids_blank_list_is_empty() {
        assert!(parse_manual_ids("   ").is_empty());
    }
}
