//! Reusable prompts using Handlebars for templating. Strict mode
//! makes a missing variable an error instead of an empty string.

use std::fmt;

use anyhow::Result;
use handlebars::Handlebars;
use serde_json::json;

#[derive(Debug)]
pub enum Prompt {
    SpeciesSystem,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Subjects the chatbot advertises in its system message.
pub const SPECIES_TOPICS: [&str; 8] = [
    "Animal habitats and ecosystems",
    "Diet and feeding behavior",
    "Conservation status and threats",
    "Physical characteristics and adaptations",
    "Behavior and social structures",
    "Reproduction and life cycles",
    "Classification and taxonomy",
    "Animal facts and interesting information",
];

const SPECIES_SYSTEM_PROMPT: &str = r"You are a specialized chatbot that only answers questions about animals and species. You are knowledgeable about:

{{#each topics}}- {{this}}
{{/each}}

If a user asks about anything unrelated to animals or species, politely remind them that you only handle species-related queries and suggest they ask about an animal instead.

Keep your responses informative but concise. Use a friendly, educational tone.";

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Prompts are plain text, not HTML
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(&Prompt::SpeciesSystem.to_string(), SPECIES_SYSTEM_PROMPT)
        .expect("Failed to register template");
    registry
}

/// Render the system message that sets the chatbot's persona.
pub fn species_system_prompt() -> Result<String> {
    let prompt = templates().render(
        &Prompt::SpeciesSystem.to_string(),
        &json!({ "topics": SPECIES_TOPICS }),
    )?;
    Ok(prompt.trim().to_string())
}
