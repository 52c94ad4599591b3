#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The recurring price timer fired.
    PriceTick,
    Shutdown,
}
