//! Prompt composition: placeholder substitution and system/user joining.

use crate::types::{GenerationConfig, PRODUCT_NAME_PLACEHOLDER};

/// Substitute the product name into the user prompt template.
///
/// Only the first `{product_name}` is replaced; later occurrences stay literal.
pub fn render_user_prompt(template: &str, product_name: &str) -> String {
    template.replacen(PRODUCT_NAME_PLACEHOLDER, product_name, 1)
}

/// Full prompt sent to the provider: system prompt and rendered user prompt
/// separated by a blank line.
pub fn compose_prompt(config: &GenerationConfig) -> String {
    let user_prompt = render_user_prompt(&config.user_prompt, &config.product_name);
    format!("{}\n\n{}", config.system_prompt, user_prompt)
}
