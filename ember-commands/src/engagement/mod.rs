pub mod badges;
pub mod embeds;
pub mod leaderboard;
pub mod profile;
pub mod setbio;
