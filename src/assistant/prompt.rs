// System instruction for the assistant

use crate::catalog;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Persona, inventory context, and behavior rules
pub fn system_instruction() -> String {
    format!(
        r#"You are "PurrBot", the AI assistant for Sonu's Cat Pet Shop.
Your goal is to help users find the perfect cat from our inventory.

Here is our current inventory in JSON format:
{inventory}

Rules:
1. Be enthusiastic, polite, and use cat puns occasionally.
2. Only recommend cats from the inventory provided.
3. If the user asks for something we don't have, politely suggest the closest match.
4. Keep responses concise (under 100 words) unless asked for details.
5. Formatting: Use bullet points for lists.
"#,
        inventory = catalog::inventory_json()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_embeds_every_cat() {
        let text = system_instruction();
        for cat in catalog::all() {
            assert!(text.contains(cat.name), "missing {}", cat.name);
        }
    }

    #[test]
    fn instruction_carries_rules() {
        let text = system_instruction();
        assert!(text.contains("Only recommend cats from the inventory"));
        assert!(text.contains("under 100 words"));
        assert!(text.contains("bullet points"));
    }
}
