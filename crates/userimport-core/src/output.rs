use userimport_model::ImportableUser;

/// Pretty-printed JSON document of `users`, one object per user.
pub fn render_json(users: &[ImportableUser]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(users)
}
