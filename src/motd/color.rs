//! The legacy color code table.

use std::fmt;

/// One of the sixteen legacy Minecraft colors, keyed by a lowercase hex digit.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ColorCode {
    /// Hex digit: `0`, name: `black`
    Black = 0,
    /// Hex digit: `1`, name: `dark_blue`
    DarkBlue,
    /// Hex digit: `2`, name: `dark_green`
    DarkGreen,
    /// Hex digit: `3`, name: `dark_aqua`
    DarkAqua,
    /// Hex digit: `4`, name: `dark_red`
    DarkRed,
    /// Hex digit: `5`, name: `dark_purple`
    DarkPurple,
    /// Hex digit: `6`, name: `gold`
    Gold,
    /// Hex digit: `7`, name: `gray`
    Gray,
    /// Hex digit: `8`, name: `dark_gray`
    DarkGray,
    /// Hex digit: `9`, name: `blue`
    Blue,
    /// Hex digit: `a`, name: `green`
    Green,
    /// Hex digit: `b`, name: `aqua`
    Aqua,
    /// Hex digit: `c`, name: `red`
    Red,
    /// Hex digit: `d`, name: `light_purple`
    LightPurple,
    /// Hex digit: `e`, name: `yellow`
    Yellow,
    /// Hex digit: `f`, name: `white`
    White,
}

impl ColorCode {
    /// Every color, in code order.
    pub const ALL: [ColorCode; 16] = [
        ColorCode::Black,
        ColorCode::DarkBlue,
        ColorCode::DarkGreen,
        ColorCode::DarkAqua,
        ColorCode::DarkRed,
        ColorCode::DarkPurple,
        ColorCode::Gold,
        ColorCode::Gray,
        ColorCode::DarkGray,
        ColorCode::Blue,
        ColorCode::Green,
        ColorCode::Aqua,
        ColorCode::Red,
        ColorCode::LightPurple,
        ColorCode::Yellow,
        ColorCode::White,
    ];

    /// Look up the color for a code character.
    ///
    /// Only lowercase hex digits are recognized; `'A'` and the style codes
    /// (`k`-`o`, `r`) return `None`.
    pub const fn from_code(code: char) -> Option<Self> {
        let index = match code {
            '0'..='9' => code as usize - '0' as usize,
            'a'..='f' => code as usize - 'a' as usize + 10,
            _ => return None,
        };
        Some(Self::ALL[index])
    }

    /// Returns the corresponding hex digit of the color.
    #[cfg(test)]
    const fn code(self) -> char {
        b"0123456789abcdef"[self as usize] as char
    }

    /// Returns the canonical name of the color.
    pub const fn name(self) -> &'static str {
        [
            "black",
            "dark_blue",
            "dark_green",
            "dark_aqua",
            "dark_red",
            "dark_purple",
            "gold",
            "gray",
            "dark_gray",
            "blue",
            "green",
            "aqua",
            "red",
            "light_purple",
            "yellow",
            "white",
        ][self as usize]
    }

    /// Returns the color's RGB value as used by the vanilla client.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorCode::Black => (0x00, 0x00, 0x00),
            ColorCode::DarkBlue => (0x00, 0x00, 0xaa),
            ColorCode::DarkGreen => (0x00, 0xaa, 0x00),
            ColorCode::DarkAqua => (0x00, 0xaa, 0xaa),
            ColorCode::DarkRed => (0xaa, 0x00, 0x00),
            ColorCode::DarkPurple => (0xaa, 0x00, 0xaa),
            ColorCode::Gold => (0xff, 0xaa, 0x00),
            ColorCode::Gray => (0xaa, 0xaa, 0xaa),
            ColorCode::DarkGray => (0x55, 0x55, 0x55),
            ColorCode::Blue => (0x55, 0x55, 0xff),
            ColorCode::Green => (0x55, 0xff, 0x55),
            ColorCode::Aqua => (0x55, 0xff, 0xff),
            ColorCode::Red => (0xff, 0x55, 0x55),
            ColorCode::LightPurple => (0xff, 0x55, 0xff),
            ColorCode::Yellow => (0xff, 0xff, 0x55),
            ColorCode::White => (0xff, 0xff, 0xff),
        }
    }

    /// Returns the RGB value as a `#rrggbb` string.
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_table() {
        assert_eq!(ColorCode::from_code('0'), Some(ColorCode::Black));
        assert_eq!(ColorCode::from_code('6'), Some(ColorCode::Gold));
        assert_eq!(ColorCode::from_code('a'), Some(ColorCode::Green));
        assert_eq!(ColorCode::from_code('f'), Some(ColorCode::White));

        assert_eq!(ColorCode::from_code('A'), None);
        assert_eq!(ColorCode::from_code('g'), None);
        assert_eq!(ColorCode::from_code('l'), None);
        assert_eq!(ColorCode::from_code('r'), None);
        assert_eq!(ColorCode::from_code('§'), None);
    }

    #[test]
    fn test_code_name_round_trip() {
        for color in ColorCode::ALL {
            assert_eq!(ColorCode::from_code(color.code()), Some(color));
        }
        assert_eq!(ColorCode::LightPurple.name(), "light_purple");
        assert_eq!(ColorCode::DarkAqua.to_string(), "dark_aqua");
    }

    #[test]
    fn test_hex() {
        assert_eq!(ColorCode::Green.hex(), "#55ff55");
        assert_eq!(ColorCode::Black.hex(), "#000000");
        assert_eq!(ColorCode::Gold.hex(), "#ffaa00");
    }
}
