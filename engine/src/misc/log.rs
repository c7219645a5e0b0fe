/*!
Items related to [logging](log).

Calls to the log macros are made at the points where process-wide state
changes: jump-table construction, nonlinear data replacement, package seed
updates and stream construction.

No log implementation is provided.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [linear backbone](crate::backbone)
    pub const BACKBONE: &str = "backbone";

    /// Logs related to the [nonlinear combiner](crate::nonlinear)
    pub const NONLINEAR: &str = "nonlinear";

    /// Logs related to [streams and substreams](crate::stream)
    pub const STREAM: &str = "stream";
}
