//! Prompt templates for paraphrasing

/// System persona for the paraphrase backend
pub const PARAPHRASE_SYSTEM_PROMPT: &str =
    "You are a helpful AI that paraphrases text clearly and naturally.";

/// User instruction embedding the variant count and the literal input text
pub fn paraphrase_prompt(text: &str, num_variants: usize) -> String {
    format!(
        "Paraphrase the following text into {} distinct, natural, and fluent English variations. \
         Return only the paraphrased sentences, without numbering, quotes, or any labels:\n\n{}",
        num_variants, text
    )
}
