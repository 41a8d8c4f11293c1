/// One engagement record per user. Created lazily on a user's first observed
/// message and never deleted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: u64,
    pub xp: i64,
    pub level: i64,
    pub messages: i64,
    pub bio: String,
}

/// Counters after a recorded message has been applied to an existing profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageUpdate {
    pub xp: i64,
    pub level: i64,
    pub messages: i64,
    pub leveled_up: bool,
}

/// Result of feeding one message event into the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageOutcome {
    /// First message from this user: a default profile was created and no XP
    /// was applied for this event.
    Created,
    /// Counters were incremented on an existing profile.
    Updated(MessageUpdate),
}

/// One leaderboard row: a user and their current XP total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: u64,
    pub xp: i64,
}
