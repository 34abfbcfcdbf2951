//! Buttons of the NES joypad.
use crate::NesEnvError;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A button of the NES joypad.
///
/// Each button is bound to one bit of the 8-bit control word, except [`Button::Nop`],
/// which is bound to no bit. Names are case-sensitive:
///
/// | name     | value        |
/// |----------|--------------|
/// | `right`  | `0b10000000` |
/// | `left`   | `0b01000000` |
/// | `down`   | `0b00100000` |
/// | `up`     | `0b00010000` |
/// | `start`  | `0b00001000` |
/// | `select` | `0b00000100` |
/// | `B`      | `0b00000010` |
/// | `A`      | `0b00000001` |
/// | `NOP`    | `0b00000000` |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display,
)]
pub enum Button {
    #[strum(serialize = "right")]
    Right,
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "down")]
    Down,
    #[strum(serialize = "up")]
    Up,
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "select")]
    Select,
    #[strum(serialize = "B")]
    B,
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "NOP")]
    Nop,
}

impl Button {
    /// Returns the bit of the button in the control word.
    pub const fn value(self) -> u8 {
        match self {
            Self::Right => 0b1000_0000,
            Self::Left => 0b0100_0000,
            Self::Down => 0b0010_0000,
            Self::Up => 0b0001_0000,
            Self::Start => 0b0000_1000,
            Self::Select => 0b0000_0100,
            Self::B => 0b0000_0010,
            Self::A => 0b0000_0001,
            Self::Nop => 0b0000_0000,
        }
    }

    /// Looks up a button by its canonical name.
    pub fn from_name(name: &str) -> Result<Self, NesEnvError> {
        name.parse()
            .map_err(|_| NesEnvError::UnknownButton(name.to_string()))
    }

    /// Returns the canonical name of the button.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_button_values() {
        assert_eq!(Button::from_name("right").unwrap().value(), 0b10000000);
        assert_eq!(Button::from_name("left").unwrap().value(), 0b01000000);
        assert_eq!(Button::from_name("down").unwrap().value(), 0b00100000);
        assert_eq!(Button::from_name("up").unwrap().value(), 0b00010000);
        assert_eq!(Button::from_name("start").unwrap().value(), 0b00001000);
        assert_eq!(Button::from_name("select").unwrap().value(), 0b00000100);
        assert_eq!(Button::from_name("B").unwrap().value(), 0b00000010);
        assert_eq!(Button::from_name("A").unwrap().value(), 0b00000001);
        assert_eq!(Button::from_name("NOP").unwrap().value(), 0);
    }

    #[test]
    fn test_bits_are_distinct() {
        let pressable = Button::iter().filter(|b| *b != Button::Nop);
        let mut seen = 0u8;
        for b in pressable {
            assert_eq!(b.value().count_ones(), 1, "{}", b);
            assert_eq!(seen & b.value(), 0, "{}", b);
            seen |= b.value();
        }
        assert_eq!(seen, 0xff);
    }

    #[test]
    fn test_names_round_trip() {
        for b in Button::iter() {
            assert_eq!(Button::from_name(b.name()), Ok(b));
            assert_eq!(b.to_string(), b.name());
        }
    }

    #[test]
    fn test_unknown_button() {
        assert_eq!(
            Button::from_name("jump"),
            Err(NesEnvError::UnknownButton("jump".to_string()))
        );
        // names are case-sensitive
        assert!(Button::from_name("a").is_err());
        assert!(Button::from_name("Right").is_err());
    }
}
