use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

pub struct Palette;

impl Palette {
    pub fn default_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.headers[0].set_fg(Palette::VIOLET);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Palette::YELLOW);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.headers[2].set_fg(Palette::BLUE);
        skin.headers[2].add_attr(Attribute::Bold);

        skin.table.set_fg(Palette::PURPLE);
        skin.bullet.set_fg(Palette::ORANGE);
        skin.quote_mark.set_char('┃');
        skin.quote_mark.set_fg(Palette::COMMENT);

        skin.inline_code.set_fg(Palette::GREEN);
        skin.italic.set_fg(Palette::COMMENT);

        skin
    }

    /// One color per weekday, Monday first. Chart bars and the selected
    /// calendar week use the color of their weekday.
    pub const DAYS: [Color; 7] = [
        Palette::PURPLE,
        Palette::YELLOW,
        Palette::ORANGE,
        Palette::GREEN,
        Palette::BLUE,
        Palette::PINK,
        Palette::VIOLET,
    ];

    pub const PURPLE: Color = Color::Rgb {
        r: 0xA8,
        g: 0x55,
        b: 0xF7,
    }; // #A855F7
    pub const YELLOW: Color = Color::Rgb {
        r: 0xFA,
        g: 0xCC,
        b: 0x15,
    }; // #FACC15
    pub const ORANGE: Color = Color::Rgb {
        r: 0xF9,
        g: 0x73,
        b: 0x16,
    }; // #F97316
    pub const GREEN: Color = Color::Rgb {
        r: 0x10,
        g: 0xB9,
        b: 0x81,
    }; // #10B981
    pub const BLUE: Color = Color::Rgb {
        r: 0x3B,
        g: 0x82,
        b: 0xF6,
    }; // #3B82F6
    pub const PINK: Color = Color::Rgb {
        r: 0xEC,
        g: 0x48,
        b: 0x99,
    }; // #EC4899
    pub const VIOLET: Color = Color::Rgb {
        r: 0x8B,
        g: 0x5C,
        b: 0xF6,
    }; // #8B5CF6

    // neutrals
    pub const COMMENT: Color = Color::Rgb {
        r: 0x5C,
        g: 0x63,
        b: 0x70,
    }; // #5C6370
}
