//! Prompt slot splitting and joining.

/// Delimiter used to join resolved prompts, independent of the input delimiter.
pub const OUTPUT_DELIMITER: &str = ";;;;;";

/// Default input delimiter for `prompt_list`.
pub const DEFAULT_PROMPT_DELIMITER: &str = ";;;;;";

/// Split `prompt_list` into trimmed template slots.
///
/// The split is literal. Empty segments are kept so slot positions keep lining
/// up with ID positions. An empty delimiter does not split.
pub fn split_prompts(prompt_list: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![prompt_list.trim().to_string()];
    }
    prompt_list.split(delimiter).map(|slot| slot.trim().to_string()).collect()
}

/// Join slot texts with `delimiter`.
pub fn join_slots<S: AsRef<str>>(slots: &[S], delimiter: &str) -> String {
    slots.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(delimiter)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn splits_on_literal_delimiter_and_trims() {
        let slots = split_prompts(" [a1] in watercolor ;;;;; [a1] in oil ", ";;;;;");
        assert_eq!(slots, vec!["[a1] in watercolor", "[a1] in oil"]);
    }

    #[test]
    fn delimiter_is_not_a_regex() {
        let slots = split_prompts("a.*b|c.*d", ".*");
        assert_eq!(slots, vec!["a", "b|c", "d"]);
    }

    #[test]
    fn empty_segments_are_preserved() {
        let slots = split_prompts("first;;;;;;;;;;third", ";;;;;");
        assert_eq!(slots, vec!["first", "", "third"]);

        let slots = split_prompts("first;;;;;;;;;;;;;;;third", ";;;;;");
        assert_eq!(slots, vec!["first", "", "", "third"]);
    }

    #[test]
    fn empty_prompt_list_is_one_empty_slot() {
        assert_eq!(split_prompts("", ";;;;;"), vec![""]);
    }

    #[test]
    fn empty_delimiter_keeps_text_whole() {
        assert_eq!(split_prompts(" a;b ", ""), vec!["a;b"]);
    }

    #[test]
    fn join_uses_given_delimiter() {
        assert_eq!(join_slots(&["a", "", "c"], OUTPUT_DELIMITER), "a;;;;;;;;;;c");
    }

    fn slot_strategy() -> impl Strategy<Value = String> {
        "[a-z\\[\\]0-9 ]{0,12}".prop_map(|s| s.trim().to_string())
    }

    proptest! {
        #[test]
        fn split_join_round_trip(
            slots in proptest::collection::vec(slot_strategy(), 1..8),
            delimiter in prop_oneof![Just(";;;;;"), Just("|"), Just("\n---\n")],
        ) {
            let joined = join_slots(&slots, delimiter);
            prop_assert_eq!(split_prompts(&joined, delimiter), slots);
        }
    }
}
