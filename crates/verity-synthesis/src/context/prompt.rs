use verity_core::models::{ContextAssertion, EntityDescriptor, EntityKind};

/// Instructions sent with every generation request.
pub const SYSTEM_INSTRUCTIONS: &str = "You summarize approved knowledge about one data entity. \
Write 2 to 4 plain sentences. Use only the numbered assertions provided. \
Respond with a JSON object: {\"synthesisText\": string, \"confidenceScore\": number between 0 and 1, \
\"citedAssertionIds\": array of the assertion ids you relied on}. \
Cite only ids that appear in the context.";

/// Render the entity header and one block per assertion.
pub fn render_prompt(entity: &EntityDescriptor, blocks: &[String]) -> String {
    let mut prompt = render_entity(entity);
    prompt.push_str("\nApproved assertions:\n");
    for block in blocks {
        prompt.push_str(block);
        prompt.push('\n');
    }
    prompt
}

pub(crate) fn render_entity(entity: &EntityDescriptor) -> String {
    let kind = match entity.kind {
        EntityKind::Table => "table",
        EntityKind::Column => "column",
    };
    let mut out = format!("Entity: {} ({kind})\n", entity.path);
    if let Some(data_type) = &entity.data_type {
        out.push_str(&format!("Data type: {data_type}\n"));
    }
    if let Some(description) = &entity.description {
        out.push_str(&format!("Description: {description}\n"));
    }
    out
}

pub(crate) fn render_assertion(assertion: &ContextAssertion) -> String {
    let mut out = format!(
        "[{}] {} / {}",
        assertion.id,
        assertion.kind.as_str(),
        assertion.status.as_str()
    );
    if let Some(author) = &assertion.author {
        out.push_str(&format!(" by {author}"));
    }
    out.push('\n');
    if let Some(primary) = &assertion.content.primary {
        out.push_str(&format!("  primary: {primary}\n"));
    }
    if let Some(secondary) = &assertion.content.secondary {
        out.push_str(&format!("  secondary: {secondary}\n"));
    }
    out
}
