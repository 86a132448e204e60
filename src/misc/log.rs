/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to record the trail of a change operation: which beliefs were raised or lowered, and why.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [degree](crate::procedures::degree) calculation.
    pub const DEGREE: &str = "degree";

    /// Logs related to [expansion](crate::procedures::expand).
    pub const EXPAND: &str = "expand";

    /// Logs related to [contraction](crate::procedures::contract).
    pub const CONTRACT: &str = "contract";

    /// Logs related to [revision](crate::procedures::revise).
    pub const REVISE: &str = "revise";

    /// Logs related to [resolution](crate::resolution).
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [reorder queue](crate::db::reorder_q).
    pub const QUEUE: &str = "queue";

    /// Logs related to the [belief database](crate::db::store).
    pub const BASE: &str = "base";
}
