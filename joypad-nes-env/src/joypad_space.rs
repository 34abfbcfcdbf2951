//! Discrete action space over the NES joypad.
use crate::{ActionMap, ButtonMask, JoypadAct, JoypadSpaceConfig};
use anyhow::Result;
use joypad_core::{record::Record, ActionSpace, Env, Step};
use log::{info, trace};

/// An environment wrapper converting the joypad control word into a discrete action space.
///
/// The wrapped environment `E` takes a [`ButtonMask`] at every step. [`JoypadSpace`] is
/// built from an ordered list of button combinations and exposes
/// [`ActionSpace::Discrete`] with one action per combination. At every step the
/// discrete action is replaced with the mask of its combination and handed to `E`.
/// Observation, reward, termination flags, information and record of `E` are
/// returned as they are.
///
/// ```ignore
/// let env = JoypadSpace::new(nes_env, &[vec!["NOP"], vec!["right"], vec!["right", "A"]])?;
/// assert_eq!(env.action_space(), ActionSpace::Discrete(Discrete::new(3)));
///
/// // presses right and A
/// let (step, _) = env.step(&JoypadAct::new(2))?;
/// ```
pub struct JoypadSpace<E> {
    env: E,
    action_map: ActionMap,
}

impl<E> JoypadSpace<E>
where
    E: Env<Act = ButtonMask>,
{
    /// Wraps `env` with the button combinations `actions`.
    ///
    /// Fails with [`NesEnvError::UnknownButton`](crate::NesEnvError::UnknownButton)
    /// if a combination includes a name which is not a button.
    pub fn new<S: AsRef<str>>(env: E, actions: &[Vec<S>]) -> Result<Self> {
        let action_map = ActionMap::compile(actions)?;
        info!(
            "Wraps the environment with a discrete space of {} actions",
            action_map.len()
        );

        Ok(Self { env, action_map })
    }

    /// Returns the compiled table of button masks.
    pub fn action_map(&self) -> &ActionMap {
        &self.action_map
    }

    /// Returns the names of the buttons of each action, joined by a space.
    pub fn action_meanings(&self) -> Vec<String> {
        self.action_map.meanings().to_vec()
    }

    /// Returns the wrapped environment.
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Returns the wrapped environment.
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Unwraps the environment.
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E> Env for JoypadSpace<E>
where
    E: Env<Act = ButtonMask>,
{
    type Config = JoypadSpaceConfig<E::Config>;
    type Obs = E::Obs;
    type Act = JoypadAct;
    type Info = E::Info;

    /// Builds the wrapped environment with `config.env_config` and wraps it
    /// with `config.actions`.
    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let env = E::build(&config.env_config, seed)?;
        Self::new(env, &config.actions)
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        let mask = self.action_map.get(a.act)?;
        trace!("act {} -> {}", a.act, mask);
        let (step, record) = self.env.step(&mask)?;

        Ok((step.with_act::<Self>(*a), record))
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.env.reset()
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.env.reset_with_index(ix)
    }

    fn action_space(&self) -> ActionSpace {
        self.action_map.space().into()
    }
}
