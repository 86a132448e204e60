/*!
Configuration of a belief base.

All configuration for a base is contained within a [Config] struct, fixed when the base is created.
Databases copy the parts of the configuration they consult.
*/

pub mod order;
pub use order::OrderValue;

/// The default width of a stratum.
///
/// Orders within this distance of the first member of a stratum belong to the stratum.
pub const DEFAULT_STRATUM_TOLERANCE: OrderValue = 1e-9;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The tolerance used when grouping beliefs into strata, and when comparing two degrees.
    ///
    /// Orders within the tolerance of each other rank as a single stratum, though the stored values remain distinct.
    pub stratum_tolerance: OrderValue,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stratum_tolerance: DEFAULT_STRATUM_TOLERANCE,
        }
    }
}
