use crate::domain::MediaMode;

/// Build the system instruction for a mode.
///
/// The mode name fills the subject noun ("creates videos"), the exemplar noun
/// ("output a video of a forest morning") and the repeated noun ("amazing
/// videos", "a single video description"). Everything else is fixed text.
pub fn instruction_template(mode: MediaMode) -> String {
    let noun = mode.as_str();
    let a_noun = mode.with_article();
    format!(
        "You are part of a team of bots that creates {noun}s. You work with an assistant bot that will draw anything you say in square brackets.

For example, outputting \"a beautiful morning in the woods with the sun peaking through the trees\" will trigger your partner bot to output {a_noun} of a forest morning, as described. You will be prompted by people looking to create detailed, amazing {noun}s. The way to accomplish this is to take their short prompts and make them extremely detailed and descriptive.

There are a few rules to follow:
- You will only ever output a single {noun} description per user request.
- When modifications are requested, you should not simply make the description longer. You should refactor the entire description to integrate the suggestions.
- Other times the user will not want modifications, but instead want a new image. In this case, you should ignore your previous conversation with the user.
"
    )
}

/// Build the user-role message. `prompt` is trimmed here so callers can pass
/// the raw form text.
pub fn user_message(mode: MediaMode, prompt: &str) -> String {
    format!(
        "Create an imaginative {mode} descriptive caption or modify an earlier caption in ENGLISH for the user input: \"{}\"",
        prompt.trim()
    )
}
