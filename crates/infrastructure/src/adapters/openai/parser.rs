//! Parsing of chat-completion replies into suggested tasks.

use listy_domain::AiTask;

use crate::errors::{InfraError, RemoteTarget};

/// Extracts the task array from a model reply.
///
/// Models often wrap JSON in a Markdown fence or add prose around it, so
/// parsing is attempted on the fence-stripped text first and then on the
/// span from the first `[` to the last `]`. An empty array is accepted.
///
/// # Errors
///
/// Returns [`InfraError::Serialization`] carrying the raw reply when neither
/// attempt yields a task array.
///
/// # Examples
///
/// ```
/// use listy_infrastructure::adapters::openai::parse_task_reply;
///
/// let reply = "```json\n[{\"text\": \"Book venue\"}]\n```";
/// let tasks = parse_task_reply(reply).unwrap();
/// assert_eq!(tasks[0].text, "Book venue");
/// ```
pub fn parse_task_reply(reply: &str) -> Result<Vec<AiTask>, InfraError> {
    let content = strip_code_fence(reply);

    if let Ok(tasks) = serde_json::from_str::<Vec<AiTask>>(content) {
        return Ok(tasks);
    }

    let bracketed = content
        .find('[')
        .zip(content.rfind(']'))
        .filter(|(start, end)| start < end)
        .map(|(start, end)| &content[start..=end]);

    match bracketed.map(serde_json::from_str::<Vec<AiTask>>) {
        Some(Ok(tasks)) => Ok(tasks),
        Some(Err(error)) => Err(unparsable(&error.to_string(), reply)),
        None => Err(unparsable("no JSON array found", reply)),
    }
}

/// Trims the reply and removes a surrounding ```` ```json ```` or
/// ```` ``` ```` fence.
#[must_use]
pub fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

fn unparsable(reason: &str, raw: &str) -> InfraError {
    tracing::warn!(target_service = %RemoteTarget::AiService, reason, "unparsable AI reply");
    InfraError::serialization(format!(
        "failed to parse AI response: {reason}. Response was: {raw}"
    ))
}

// =============================================================================
// Tests
// =============================================================================
