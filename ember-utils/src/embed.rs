/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_55_30;

/// Gold accent for the badges embed.
pub const BADGES_EMBED_COLOR: u32 = 0xF1_C4_0F;

/// Green accent for the leaderboard embed.
pub const LEADERBOARD_EMBED_COLOR: u32 = 0x2E_CC_71;
