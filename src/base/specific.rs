/*!
A specific base, with the backend fixed to the in-process [CanonicalBackend].
*/

use crate::{backend::CanonicalBackend, base::GenericBase, config::Config};

/// A belief base over the in-process backend.
pub type BeliefBase = GenericBase<CanonicalBackend>;

impl BeliefBase {
    /// A base from the given configuration, holding no beliefs.
    pub fn from_config(config: Config) -> Self {
        GenericBase::with_backend(config, CanonicalBackend)
    }
}

impl Default for BeliefBase {
    fn default() -> Self {
        BeliefBase::from_config(Config::default())
    }
}
