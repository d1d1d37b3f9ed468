use cleanslate_core::urgency::content_for;
use serde_json::json;

use super::{open_state, print_json};

pub fn run(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = open_state()?;
    let addiction = state.find(id)?;
    let content = content_for(addiction);
    tracing::info!(id = %addiction.id, topic = ?content.topic, "urgency panel opened");
    print_json(&json!({
        "id": addiction.id,
        "emoji": addiction.emoji,
        "urgency": content,
    }))
}
