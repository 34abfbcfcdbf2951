#![allow(dead_code)]
//! A stub of an environment taking the joypad control word.
use anyhow::Result;
use joypad_core::{
    record::{Record, RecordValue},
    ActionSpace, Env, Info, Obs, Step,
};
use joypad_nes_env::ButtonMask;

/// Observation returned by [`StubEnv::reset`].
pub const RESET_OBS: StubObs = StubObs(-1);

#[derive(Clone, Debug, PartialEq)]
pub struct StubObs(pub i64);

impl Obs for StubObs {}

#[derive(Clone, Debug, PartialEq)]
pub struct StubInfo {
    pub t: usize,
}

impl Info for StubInfo {}

#[derive(Clone, Debug, PartialEq)]
pub struct StubEnvConfig {
    pub episode_len: usize,
}

impl Default for StubEnvConfig {
    fn default() -> Self {
        Self { episode_len: 3 }
    }
}

/// Keeps every mask it is stepped with. The reward of a step is the mask as a number,
/// and the episode terminates after `episode_len` steps.
pub struct StubEnv {
    pub episode_len: usize,
    pub seed: i64,
    pub t: usize,
    pub masks: Vec<ButtonMask>,
    pub n_resets: usize,
    pub reset_ixs: Vec<usize>,
}

impl StubEnv {
    pub fn new(episode_len: usize) -> Self {
        Self {
            episode_len,
            seed: 0,
            t: 0,
            masks: vec![],
            n_resets: 0,
            reset_ixs: vec![],
        }
    }

    pub fn last_mask(&self) -> Option<ButtonMask> {
        self.masks.last().copied()
    }
}

impl Env for StubEnv {
    type Config = StubEnvConfig;
    type Obs = StubObs;
    type Act = ButtonMask;
    type Info = StubInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let mut env = Self::new(config.episode_len);
        env.seed = seed;
        Ok(env)
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        self.masks.push(*a);
        self.t += 1;
        let step = Step::new(
            StubObs(self.t as i64),
            *a,
            a.bits() as f32,
            self.t >= self.episode_len,
            false,
            StubInfo { t: self.t },
        );
        let record = Record::from_slice(&[("mask", RecordValue::Scalar(a.bits() as f32))]);
        Ok((step, record))
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.t = 0;
        self.n_resets += 1;
        Ok(RESET_OBS)
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.t = 0;
        self.reset_ixs.push(ix);
        Ok(StubObs(-100 - ix as i64))
    }

    fn action_space(&self) -> ActionSpace {
        ActionSpace::MultiBinary(8)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
