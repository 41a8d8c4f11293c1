use poise::serenity_prelude as serenity;

pub fn no_profile_message() -> &'static str {
    "No profile found."
}

pub fn no_profile_hint_message() -> &'static str {
    "No profile found. Start chatting to create one!"
}

pub fn display_name_for_user(user: &serenity::User) -> String {
    user.global_name
        .clone()
        .unwrap_or_else(|| user.name.clone())
}

/// Resolve a display name over the HTTP API, falling back to "Unknown" for
/// users the bot can no longer see.
pub async fn fetch_display_name(http: &serenity::Http, user_id: serenity::UserId) -> String {
    match http.get_user(user_id).await {
        Ok(user) => display_name_for_user(&user),
        Err(_) => "Unknown".to_owned(),
    }
}
