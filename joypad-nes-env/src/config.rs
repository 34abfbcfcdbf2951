//! Configuration of [`JoypadSpace`](crate::JoypadSpace).
use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`JoypadSpace`](crate::JoypadSpace).
///
/// `C` is the configuration of the wrapped environment. `actions` is the ordered list
/// of button combinations; the index of a combination is its discrete action.
///
/// In YAML:
///
/// ```yaml
/// env_config: ~
/// actions:
///   - [NOP]
///   - [right]
///   - [right, A]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoypadSpaceConfig<C> {
    /// Configuration of the wrapped environment.
    pub env_config: C,

    /// Button combinations, by their names.
    pub actions: Vec<Vec<String>>,
}

impl<C: Default> Default for JoypadSpaceConfig<C> {
    fn default() -> Self {
        Self {
            env_config: C::default(),
            actions: vec![],
        }
    }
}

impl<C> JoypadSpaceConfig<C> {
    /// Sets the configuration of the wrapped environment.
    pub fn env_config(mut self, env_config: C) -> Self {
        self.env_config = env_config;
        self
    }

    /// Sets the button combinations, replacing the current ones.
    pub fn actions<S: Into<String>>(mut self, actions: Vec<Vec<S>>) -> Self {
        self.actions = actions
            .into_iter()
            .map(|names| names.into_iter().map(Into::into).collect())
            .collect();
        self
    }

    /// Appends a button combination.
    pub fn push_action<S: Into<String>>(mut self, names: Vec<S>) -> Self {
        self.actions.push(names.into_iter().map(Into::into).collect());
        self
    }
}

impl<C: Serialize + DeserializeOwned> JoypadSpaceConfig<C> {
    /// Constructs [`JoypadSpaceConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`JoypadSpaceConfig`] as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
