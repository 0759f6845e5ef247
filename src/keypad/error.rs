/// Errors reported by keypad registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError {
    /// Keymap length does not equal rows x columns.
    KeymapMismatch,
    /// No free slot or chain node left for a new registration.
    CapacityExhausted,
    /// The configuration is already bound to a registered instance.
    AlreadyRegistered,
    /// No registered instance matches the given id or configuration.
    NotFound,
}

impl core::fmt::Display for KeypadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KeypadError::KeymapMismatch => {
                write!(f, "keymap length does not equal rows x columns")
            }
            KeypadError::CapacityExhausted => {
                write!(f, "no free slot for a new registration")
            }
            KeypadError::AlreadyRegistered => {
                write!(f, "configuration is already bound to an instance")
            }
            KeypadError::NotFound => write!(f, "no registered instance matches"),
        }
    }
}
