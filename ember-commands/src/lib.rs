pub mod engagement;
pub mod utility;

use ember_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    engagement::profile::META,
    engagement::setbio::META,
    engagement::badges::META,
    engagement::leaderboard::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        utility::help::help(),
        engagement::profile::profile(),
        engagement::setbio::setbio(),
        engagement::badges::badges(),
        engagement::leaderboard::leaderboard(),
    ]
}
