/// Control actions supported by the simulation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop before the next step and report the run as interrupted.
    StopEarly,
}
