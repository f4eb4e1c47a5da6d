/// Builds the judge prompt. Pure and total: any three strings, including empty ones.
pub fn build_prompt(question: &str, expected: &str, actual: &str) -> String {
    format!(
        "Rate how correct the assistant's answer is compared to the expected answer.\n\n\
         User question: {question}\n\n\
         Expected (reference) answer: {expected}\n\n\
         Assistant's answer: {actual}\n\n\
         Give a score from 0.0 to 1.0 (1.0 = the answer is fully correct / covers the expected answer, \
         0.0 = entirely wrong or off-topic)."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_deterministic() {
        let a = build_prompt("What is a volume?", "Persistent storage.", "A disk.");
        let b = build_prompt("What is a volume?", "Persistent storage.", "A disk.");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn prompt_embeds_all_three_inputs() {
        let p = build_prompt("QQ", "EE", "AA");
        assert!(p.contains("User question: QQ"));
        assert!(p.contains("Expected (reference) answer: EE"));
        assert!(p.contains("Assistant's answer: AA"));
        assert!(p.contains("0.0 to 1.0"));
    }

    #[test]
    fn placeholders_in_inputs_are_not_expanded() {
        let p = build_prompt("{expected}", "real expected", "{question}");
        assert!(p.contains("User question: {expected}"));
        assert!(p.contains("Expected (reference) answer: real expected"));
        assert!(p.contains("Assistant's answer: {question}"));
    }

    #[test]
    fn empty_inputs_still_produce_full_prompt() {
        let p = build_prompt("", "", "");
        assert!(p.contains("User question: \n"));
        assert!(!p.contains('{'));
    }
}
