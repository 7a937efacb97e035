//! AI related-character suggestions.
//!
//! Asks the LLM for figures connected to a character and resolves each name
//! against the catalog. Suggestions are best effort: any LLM failure yields
//! an empty list rather than an error.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use regex_lite::Regex;

use deva_domain::{Character, CharacterId};
use deva_shared::{RelatedCharacterDto, RelatedResponse};

use crate::infrastructure::ports::{CharacterSource, ChatMessage, LlmPort, LlmRequest};

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 6;

const SYSTEM_PROMPT: &str = "You are a scholar of Hindu mythology. \
Answer only with a JSON array of character names, no commentary.";

// "- Name", "* Name", "• Name", "1. Name", "2) Name"
static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*•]|\d+[.)])\s+(.+?)\s*$").expect("valid regex")
});

// Trailing explanation after a name: "Sita - his wife", "Lakshmana: brother"
static EXPLANATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\s*[:(]|\s+[-–—]).*$").expect("valid regex"));

#[derive(Debug, thiserror::Error)]
pub enum RelatedError {
    #[error("Character not found: {0}")]
    CharacterNotFound(String),
}

pub struct SuggestRelated {
    llm: Arc<dyn LlmPort>,
    characters: Arc<dyn CharacterSource>,
}

impl SuggestRelated {
    pub fn new(llm: Arc<dyn LlmPort>, characters: Arc<dyn CharacterSource>) -> Self {
        Self { llm, characters }
    }

    /// Suggest related characters for `id`.
    ///
    /// Only an unknown character is an error.
    pub async fn execute(&self, id: &str) -> Result<RelatedResponse, RelatedError> {
        let catalog = self.characters.catalog();
        let character = CharacterId::new(id)
            .ok()
            .and_then(|id| catalog.get(&id))
            .ok_or_else(|| RelatedError::CharacterNotFound(id.to_string()))?;

        let request = LlmRequest::new(vec![ChatMessage::user(build_prompt(character))])
            .with_system_prompt(SYSTEM_PROMPT)
            .with_temperature(0.3)
            .with_max_tokens(Some(200));

        let names = match self.llm.generate(request).await {
            Ok(response) => parse_suggestions(&response.content, character),
            Err(e) => {
                tracing::warn!(
                    character_id = %character.id(),
                    error = %e,
                    "Related-character suggestion failed, returning none"
                );
                Vec::new()
            }
        };

        let suggestions = names
            .into_iter()
            .map(|name| RelatedCharacterDto {
                character_id: catalog.find_by_name(&name).map(|c| c.id().to_string()),
                name,
            })
            .collect();

        Ok(RelatedResponse {
            character_id: character.id().to_string(),
            suggestions,
        })
    }
}

fn build_prompt(character: &Character) -> String {
    let name = character.name();
    let mut prompt = format!(
        "List up to {MAX_SUGGESTIONS} characters from Hindu mythology most closely related to {}",
        name.english()
    );
    if !name.native().is_empty() {
        prompt.push_str(&format!(" ({})", name.native()));
    }
    prompt.push_str(&format!(", a {}.", character.character_type().label()));
    if !character.significance().is_empty() {
        prompt.push_str(&format!(" {}", character.significance()));
    }
    prompt.push_str(" Reply with a JSON array of English names only.");
    prompt
}

/// Extract names from a JSON array, or failing that a bullet or numbered
/// list. Drops blanks, case-insensitive duplicates and the character itself.
fn parse_suggestions(raw: &str, character: &Character) -> Vec<String> {
    let candidates = parse_json_array(raw).unwrap_or_else(|| parse_list(raw));

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .map(|name| name.trim().trim_matches('"').trim().to_string())
        .filter(|name| !name.is_empty())
        .filter(|name| !character.name().matches(name))
        .filter(|name| seen.insert(name.to_lowercase()))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// The first `[...]` span that parses as an array of strings.
fn parse_json_array(raw: &str) -> Option<Vec<String>> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&raw[start..=end]).ok()
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| LIST_ITEM_RE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| {
            let item = m.as_str().trim_matches(|c: char| c == '*' || c == '_');
            EXPLANATION_RE.replace(item, "").into_owned()
        })
        .collect()
}
