use ember_database::Database;
use ember_render::CardRenderer;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub db: Database,
    pub cards: CardRenderer,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
