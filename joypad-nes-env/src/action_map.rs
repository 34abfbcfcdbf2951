//! Compiled table from discrete actions to button masks.
use crate::{ButtonMask, NesEnvError};
use joypad_core::Discrete;
use log::debug;

/// Button masks of a list of button combinations, indexed by the discrete action.
///
/// The table is compiled once and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMap {
    masks: Box<[ButtonMask]>,
    meanings: Box<[String]>,
}

impl ActionMap {
    /// Compiles an ordered list of button combinations.
    ///
    /// The position of a combination in `actions` is its discrete action.
    /// Fails with [`NesEnvError::UnknownButton`] if any name is not a button.
    pub fn compile<S: AsRef<str>>(actions: &[Vec<S>]) -> Result<Self, NesEnvError> {
        let mut masks = Vec::with_capacity(actions.len());
        let mut meanings = Vec::with_capacity(actions.len());

        for (ix, names) in actions.iter().enumerate() {
            let mask = ButtonMask::from_names(names.as_slice())?;
            let meaning = names
                .iter()
                .map(|name| name.as_ref())
                .collect::<Vec<_>>()
                .join(" ");
            debug!("action {}: [{}] -> {}", ix, meaning, mask);
            masks.push(mask);
            meanings.push(meaning);
        }

        Ok(Self {
            masks: masks.into_boxed_slice(),
            meanings: meanings.into_boxed_slice(),
        })
    }

    /// Returns the mask of the discrete action `ix`.
    #[inline]
    pub fn get(&self, ix: usize) -> Result<ButtonMask, NesEnvError> {
        self.masks
            .get(ix)
            .copied()
            .ok_or(NesEnvError::ActionIndexOutOfRange {
                index: ix,
                n: self.masks.len(),
            })
    }

    /// Returns the number of actions.
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Returns `true` if there is no action.
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Returns the masks, indexed by discrete action.
    pub fn masks(&self) -> &[ButtonMask] {
        &self.masks
    }

    /// Returns the button names of each action joined by a space, e.g. `"right A"`.
    pub fn meanings(&self) -> &[String] {
        &self.meanings
    }

    /// Returns the discrete space of the actions.
    pub fn space(&self) -> Discrete {
        Discrete::new(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile() {
        let map = ActionMap::compile(&[vec!["right"], vec!["right", "A"], vec!["NOP"]]).unwrap();
        assert_eq!(
            map.masks(),
            &[ButtonMask(0b10000000), ButtonMask(0b10000001), ButtonMask(0b00000000)]
        );
        assert_eq!(map.len(), 3);
        assert_eq!(map.space().n(), 3);
        assert_eq!(map.get(1), Ok(ButtonMask(0b10000001)));
        assert_eq!(map.meanings(), &["right", "right A", "NOP"]);
    }

    #[test]
    fn test_empty_combination() {
        let map = ActionMap::compile(&[Vec::<&str>::new(), vec!["NOP"]]).unwrap();
        assert_eq!(map.get(0), Ok(ButtonMask::NOP));
        assert_eq!(map.get(1), Ok(ButtonMask::NOP));
        assert_eq!(map.meanings()[0], "");
    }

    #[test]
    fn test_out_of_range() {
        let map = ActionMap::compile(&[vec!["A"], vec!["B"]]).unwrap();
        assert_eq!(
            map.get(2),
            Err(NesEnvError::ActionIndexOutOfRange { index: 2, n: 2 })
        );
        assert!(map.get(usize::MAX).is_err());
    }

    #[test]
    fn test_unknown_button_fails_compile() {
        let res = ActionMap::compile(&[vec!["right"], vec!["jump", "A"]]);
        assert_eq!(res, Err(NesEnvError::UnknownButton("jump".to_string())));
    }

    #[test]
    fn test_no_actions() {
        let actions: Vec<Vec<String>> = vec![];
        let map = ActionMap::compile(&actions).unwrap();
        assert!(map.is_empty());
        assert!(map.get(0).is_err());
    }
}
