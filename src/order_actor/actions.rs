/// Custom actions for Order entities.
///
/// Both transitions are applied unconditionally, whatever the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Marks the order as `cancelled`.
    Cancel,
    /// Records payment and moves the order to `progress`.
    Pay,
}
