/// Badge rule table and evaluation.
pub mod badges;
/// Embed color constants shared across commands.
pub mod embed;
/// Character-based truncation helpers.
pub mod text;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
