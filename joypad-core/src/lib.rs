#![warn(missing_docs)]
//! Core abstractions of environments driven by discrete joypad actions.
//!
//! An environment implements [`Env`]. It consumes an action of type [`Env::Act`],
//! emits [`Step`] objects and reports its [`ActionSpace`]. Environments can be
//! stacked: a wrapper implements [`Env`] itself and forwards calls to the
//! environment it owns, changing only the parts it is responsible for.
//!
//! ```mermaid
//! graph LR
//!     Policy --> Act
//!     Act --> Env
//!     Env --> Obs
//!     Obs --> Policy
//! ```
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, ActionSpace, Discrete, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
