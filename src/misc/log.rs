/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made where a conjunction is evaluated or generated.
These are intended to help trace why a rule did (or did not) fire.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [conjunctions](crate::structures::conjunction)
    pub const CONJUNCTION: &str = "conjunction";

    /// Logs related to [random generation](crate::procedures::generate)
    pub const GENERATION: &str = "generation";
}
