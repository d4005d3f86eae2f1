/// A selectable bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub sprite_sheet: &'static str,
    /// Glyph used by text renderers.
    pub glyph: char,
}

pub const CHARACTERS: [Character; 3] = [
    Character {
        id: 1,
        name: "Bird 1",
        image: "characters/char_01.png",
        sprite_sheet: "characters/bird1_sprite.png",
        glyph: '@',
    },
    Character {
        id: 2,
        name: "Bird 2",
        image: "characters/char_02.png",
        sprite_sheet: "characters/bird2_sprite.png",
        glyph: '&',
    },
    Character {
        id: 3,
        name: "Bird 3",
        image: "characters/char_03.png",
        sprite_sheet: "characters/bird3_sprite.png",
        glyph: '%',
    },
];

impl Character {
    pub fn by_id(id: u32) -> Option<&'static Character> {
        CHARACTERS.iter().find(|c| c.id == id)
    }

    pub fn default_character() -> &'static Character {
        &CHARACTERS[0]
    }
}
