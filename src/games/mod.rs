pub mod reserved_words;

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const RESERVED_WORDS: GameInfo = GameInfo {
    id: "reserved_words",
    name: "Reserved Words",
    description: "Type every reserved word from memory before time runs out",
};
