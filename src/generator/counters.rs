/// Counts of generation outcomes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every conjunction generated.
    pub generated: usize,

    /// A count of generations without any eligible term.
    pub exhausted: usize,
}
