//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{
    record::{Record, RecordValue},
    Env, Policy,
};
use anyhow::{bail, Result};
use chrono::Local;

/// Runs a fixed number of episodes and reports the average return.
///
/// # Examples
///
/// ```ignore
/// let config = EnvConfig::default();
/// let mut evaluator = DefaultEvaluator::<Env>::new(&config, 42, 10)?;
///
/// let record = evaluator.evaluate(&mut policy)?;
/// println!("Average return: {}", record.get_scalar("Episode return")?);
/// ```
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    /// Runs `n_episodes` episodes, resetting the environment with the episode index,
    /// and returns a [`Record`] with the average return under `"Episode return"`
    /// and the time the evaluation finished under `"datetime"`.
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let mut r_total = 0f32;

        for ix in 0..self.n_episodes {
            let mut prev_obs = self.env.reset_with_index(ix)?;

            loop {
                let act = policy.sample(&prev_obs);
                let (step, _) = self.env.step(&act)?;
                r_total += step.reward;
                if step.is_done() {
                    break;
                }
                prev_obs = step.obs;
            }
        }

        let mut record = Record::from_scalar("Episode return", r_total / self.n_episodes as f32);
        record.insert("datetime", RecordValue::DateTime(Local::now()));
        Ok(record)
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`], building the environment from `config`.
    ///
    /// Fails if `n_episodes` is zero.
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Self::from_env(E::build(config, seed)?, n_episodes)
    }

    /// Constructs a new [`DefaultEvaluator`] with an environment already built.
    ///
    /// Fails if `n_episodes` is zero.
    pub fn from_env(env: E, n_episodes: usize) -> Result<Self> {
        if n_episodes == 0 {
            bail!("The number of evaluation episodes must be positive");
        }
        Ok(Self { n_episodes, env })
    }

    /// Returns the environment used for evaluation.
    pub fn env(&self) -> &E {
        &self.env
    }
}
