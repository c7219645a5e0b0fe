//! Factory configuration
//!
//! A JSON document selecting the package seeds and the nonlinear components.
//! Every field is optional; an empty object yields the default factory.
//!
//! ```json
//! {
//!   "linear_seed": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19],
//!   "nonlinear_seed": [0, 0],
//!   "components": { "kind": "scrambled", "lengths": [1019, 1021], "repetitions": 2, "seed": 42 }
//! }
//! ```

use crate::backbone::R;
use crate::error::RngError;
use crate::nonlinear::NonlinearData;
use crate::rng::Xorshift64Star;
use crate::stream::StreamFactory;
use serde::{Deserialize, Serialize};

/// Where the nonlinear component tables come from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentSource {
    /// Lengths 1019, 1021 and 1031 with the built-in scrambling
    #[default]
    Default,

    /// Explicit tables, one per component
    Tables { tables: Vec<Vec<u32>> },

    /// Equally spaced tables shuffled by xorshift64* seeded with `seed`
    Scrambled {
        lengths: Vec<usize>,
        repetitions: usize,
        seed: u64,
    },
}

/// Settings for a [`StreamFactory`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamFactoryConfig {
    /// Package linear seed (19 words); default seed when absent
    pub linear_seed: Option<Vec<u32>>,

    /// Package nonlinear seed, one index per component; zeros when absent
    pub nonlinear_seed: Option<Vec<usize>>,

    pub components: ComponentSource,
}

impl StreamFactoryConfig {
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, RngError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl StreamFactory {
    /// Factory built from `config`
    ///
    /// Everything is validated before the factory is returned.
    ///
    /// # Errors
    /// - [`RngError::InvalidArgument`] for a linear seed that is not 19 words,
    ///   a bad nonlinear seed or bad component data
    /// - [`RngError::InvalidSeed`] for a degenerate linear seed
    pub fn from_config(config: &StreamFactoryConfig) -> Result<Self, RngError> {
        let mut factory = StreamFactory::new();

        match &config.components {
            ComponentSource::Default => {}
            ComponentSource::Tables { tables } => {
                factory.install(NonlinearData::from_tables(tables.clone())?);
            }
            ComponentSource::Scrambled {
                lengths,
                repetitions,
                seed,
            } => {
                let mut source = Xorshift64Star::new(*seed);
                factory.install(NonlinearData::scrambled(&mut source, *repetitions, lengths)?);
            }
        }

        if let Some(words) = &config.linear_seed {
            let seed: [u32; R] = words.as_slice().try_into().map_err(|_| {
                RngError::InvalidArgument(format!(
                    "Linear seed must contain {} values, got {}",
                    R,
                    words.len()
                ))
            })?;
            factory.set_package_linear_seed(&seed)?;
        }

        if let Some(seed) = &config.nonlinear_seed {
            factory.set_package_nonlinear_seed(seed)?;
        }

        Ok(factory)
    }
}
