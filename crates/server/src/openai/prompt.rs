//! System prompt for text cleanup.

/// Instructions sent ahead of the user's text.
pub const SYSTEM_PROMPT: &str = concat!(
    "You are given a text and you need to make it as clear and as concise as possible. ",
    "Remove all the unnecessary words and phrases. ",
    "Make it short but without losing the meaning.",
    "\n\n",
    r#"E.g.: "Hey Team. I am going to be out of the office for the next 2 weeks. I will be back on the 15th of August." -> "hey team. im gonna be out for next 2 weeks. i'll be back on 15 Aug.""#,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_has_example_after_blank_line() {
        let (instructions, example) = SYSTEM_PROMPT.split_once("\n\n").expect("two parts");
        assert!(instructions.ends_with("without losing the meaning."));
        assert!(example.starts_with("E.g.: \"Hey Team."));
        assert!(example.ends_with("15 Aug.\""));
    }
}
