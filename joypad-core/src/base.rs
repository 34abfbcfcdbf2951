//! Core functionalities.
mod env;
mod policy;
mod space;
mod step;
pub use env::Env;
pub use policy::Policy;
pub use space::{ActionSpace, Discrete};
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Environments are not vectorized, so an object of this trait holds
/// exactly one observation.
pub trait Obs: Clone + Debug {}

/// An action of an environment.
pub trait Act: Clone + Debug {}
