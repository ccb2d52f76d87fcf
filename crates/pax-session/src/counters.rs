/// Running totals for one boarding run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counters {
    /// Passengers whose walk has started.
    pub boarded: usize,
    /// Passengers who have reached their seat.
    pub seated:  usize,
}
