//! Discrete action spaces for environments driven by the NES joypad.
//!
//! The NES joypad is read as an 8-bit control word with one bit per button.
//! An environment emulating the console takes this word, a [`ButtonMask`], as its
//! action. Agents with a discrete action space instead pick one of a short list of
//! button combinations. [`JoypadSpace`] sits in between: it is built from the list
//! of combinations, compiles each of them into a mask, and translates every discrete
//! action into the mask before stepping the wrapped environment.
//!
//! Button names are `right`, `left`, `down`, `up`, `start`, `select`, `B`, `A`, and
//! `NOP`, which presses nothing. See [`Button`] for their bits.
//!
//! ```ignore
//! use joypad_core::{Env as _, DefaultEvaluator, Evaluator as _};
//! use joypad_nes_env::{JoypadSpace, JoypadSpaceConfig};
//!
//! // `NesEnv` implements `Env<Act = ButtonMask>`
//! type Env = JoypadSpace<NesEnv>;
//!
//! let config = JoypadSpaceConfig::default()
//!     .env_config(nes_env_config)
//!     .actions(vec![
//!         vec!["NOP"],
//!         vec!["right"],
//!         vec!["right", "A"],
//!         vec!["right", "B"],
//!         vec!["right", "A", "B"],
//!         vec!["A"],
//!         vec!["left"],
//!     ]);
//!
//! let mut env = Env::build(&config, 42)?;
//! println!("{:?}", env.action_meanings());
//!
//! let record = DefaultEvaluator::<Env>::new(&config, 0, 5)?.evaluate(&mut policy)?;
//! ```
mod act;
mod action_map;
mod button;
mod config;
mod error;
mod joypad_space;
pub use act::{ButtonMask, JoypadAct};
pub use action_map::ActionMap;
pub use button::Button;
pub use config::JoypadSpaceConfig;
pub use error::NesEnvError;
pub use joypad_space::JoypadSpace;
