//! Actions of NES joypad environments.
use crate::{Button, NesEnvError};
use joypad_core::Act;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// The 8-bit control word of the joypad, one bit per pressed button.
///
/// This is the action consumed by an environment wrapped with
/// [`JoypadSpace`](crate::JoypadSpace).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonMask(pub u8);

impl ButtonMask {
    /// The mask with no button pressed.
    pub const NOP: Self = Self(0);

    /// Combines buttons given by their names.
    ///
    /// The order of names does not matter and repeated names have no effect.
    /// An empty slice gives [`ButtonMask::NOP`].
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, NesEnvError> {
        names.iter().try_fold(Self::NOP, |mask, name| {
            Ok(mask | Button::from_name(name.as_ref())?)
        })
    }

    /// Returns the raw control word.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Returns `true` if `button` is pressed in the mask.
    ///
    /// [`Button::Nop`] is never reported as pressed.
    pub fn contains(&self, button: Button) -> bool {
        button != Button::Nop && self.0 & button.value() != 0
    }

    /// Returns the pressed buttons in the order of the bits, from `right` to `A`.
    pub fn buttons(&self) -> Vec<Button> {
        Button::iter().filter(|b| self.contains(*b)).collect()
    }
}

impl Act for ButtonMask {}

impl std::ops::BitOr<Button> for ButtonMask {
    type Output = Self;

    fn bitor(self, button: Button) -> Self {
        Self(self.0 | button.value())
    }
}

impl From<u8> for ButtonMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<ButtonMask> for u8 {
    fn from(mask: ButtonMask) -> Self {
        mask.0
    }
}

impl From<Button> for ButtonMask {
    fn from(button: Button) -> Self {
        Self(button.value())
    }
}

impl fmt::Display for ButtonMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

/// A discrete action: the index of a button combination of a
/// [`JoypadSpace`](crate::JoypadSpace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JoypadAct {
    /// Index of the button combination.
    pub act: usize,
}

impl JoypadAct {
    /// Constructs a discrete action.
    pub fn new(act: usize) -> Self {
        Self { act }
    }
}

impl Act for JoypadAct {}

impl From<usize> for JoypadAct {
    fn from(act: usize) -> Self {
        Self { act }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names() {
        assert_eq!(ButtonMask::from_names(&["right"]).unwrap().bits(), 0b10000000);
        assert_eq!(
            ButtonMask::from_names(&["right", "A"]).unwrap().bits(),
            0b10000001
        );
        assert_eq!(
            ButtonMask::from_names(&["up", "start", "B"]).unwrap().bits(),
            0b00011010
        );
    }

    #[test]
    fn test_nop_and_empty_are_zero() {
        let empty: [&str; 0] = [];
        assert_eq!(ButtonMask::from_names(&empty).unwrap(), ButtonMask::NOP);
        assert_eq!(ButtonMask::from_names(&["NOP"]).unwrap(), ButtonMask::NOP);
        assert_eq!(
            ButtonMask::from_names(&["NOP", "left"]).unwrap(),
            ButtonMask::from_names(&["left"]).unwrap()
        );
    }

    #[test]
    fn test_order_and_duplicates() {
        let a = ButtonMask::from_names(&["A", "B", "right"]).unwrap();
        let b = ButtonMask::from_names(&["right", "B", "A"]).unwrap();
        let c = ButtonMask::from_names(&["B", "right", "A", "A", "B"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            ButtonMask::from_names(&["right", "jump"]),
            Err(NesEnvError::UnknownButton("jump".to_string()))
        );
    }

    #[test]
    fn test_buttons() {
        let mask = ButtonMask(0b10000001);
        assert!(mask.contains(Button::Right));
        assert!(mask.contains(Button::A));
        assert!(!mask.contains(Button::B));
        assert!(!mask.contains(Button::Nop));
        assert_eq!(mask.buttons(), vec![Button::Right, Button::A]);
        assert!(ButtonMask::NOP.buttons().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(ButtonMask(0b10000001).to_string(), "0b10000001");
        assert_eq!(ButtonMask::NOP.to_string(), "0b00000000");
    }
}
