//! Keyword and intent matching against free-form prompts.

use regex::RegexBuilder;
use tracing::error;

use crate::config::PromptTriggers;

/// Whether the prompt trips any keyword or intent trigger.
///
/// Keywords are case-insensitive substring checks against the prompt and
/// short-circuit on the first hit. Intents are compiled as case-insensitive
/// regexes and tested against the original-case prompt; a pattern that fails
/// to compile is reported and skipped without affecting its siblings.
pub(crate) fn triggers_match(prompt: &str, triggers: &PromptTriggers) -> bool {
    let lower_prompt = prompt.to_lowercase();
    if triggers
        .keywords
        .iter()
        .any(|keyword| lower_prompt.contains(&keyword.to_lowercase()))
    {
        return true;
    }

    triggers.intents.iter().any(|pattern| {
        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(regex) => regex.is_match(prompt),
            Err(err) => {
                error!(pattern, %err, "invalid intent pattern");
                false
            }
        }
    })
}
