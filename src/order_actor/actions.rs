/// Custom actions for Order records.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order one step along received → preparing → ready → completed.
    ///
    /// # Errors
    /// Fails on an order that is already completed.
    AdvanceStatus,
}
