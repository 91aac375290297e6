use uuid::Uuid;

/// Record a mutation. Called explicitly in handlers after the store accepts it.
pub fn log_event(
    action: &str,
    resource_type: &str,
    resource_id: Uuid,
    details: Option<serde_json::Value>,
) {
    match details {
        Some(details) => tracing::info!(
            target: "audit",
            action,
            resource_type,
            %resource_id,
            %details,
            "{action}"
        ),
        None => tracing::info!(
            target: "audit",
            action,
            resource_type,
            %resource_id,
            "{action}"
        ),
    }
}
