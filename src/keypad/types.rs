/// State of one tracked keypad, advanced by one step per scan tick.
///
/// ```text
/// Idle ──▶ Pressed ──▶ Hold ──▶ Released ──▶ Idle
///                        ▲────────┘ (Hold re-enters every tick)
/// ```
///
/// `Released` is transient: it is entered and left within a single tick, so
/// code polling between ticks never observes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    /// No key tracked; the next tick performs a full matrix scan.
    #[default]
    Idle,
    /// A key was detected during the previous full scan.
    Pressed,
    /// The detected key is still down; re-entered every tick it stays down.
    Hold,
    /// The detected key went up this tick.
    Released,
}

/// Logic level that signifies "pressed" for a keypad.
///
/// Active-low suits pull-up matrices, active-high suits pull-down matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    #[default]
    Low,
    High,
}

impl ActiveLevel {
    /// The pin level that reads as "pressed" under this polarity.
    pub fn pin_level(self) -> PinLevel {
        match self {
            ActiveLevel::Low => PinLevel::Low,
            ActiveLevel::High => PinLevel::High,
        }
    }

    /// The pin level that reads as "not pressed" under this polarity.
    pub fn inactive_pin_level(self) -> PinLevel {
        self.pin_level().toggled()
    }

    /// Pull direction for sense pins: the opposite of the active level.
    pub fn input_pin_mode(self) -> PinMode {
        match self {
            ActiveLevel::Low => PinMode::InputPullUp,
            ActiveLevel::High => PinMode::InputPullDown,
        }
    }
}

/// Instantaneous logic level of a physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Low,
    High,
}

impl PinLevel {
    /// The opposite level.
    pub fn toggled(self) -> PinLevel {
        match self {
            PinLevel::Low => PinLevel::High,
            PinLevel::High => PinLevel::Low,
        }
    }
}

/// Mode requested from [`PinDriver::init_pin`](crate::keypad::PinDriver::init_pin).
///
/// Pull selection can be ignored by drivers for matrices with external
/// pull resistors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    InputPullUp,
    InputPullDown,
    Output,
}

/// Returned by handler callbacks.
///
/// Reserved: the scan engine currently ignores the returned value and fires
/// every subsequent callback regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandleStatus {
    #[default]
    NotHandled,
    Handled,
}

/// A key transition delivered to a [`KeyEventHandler`](crate::keypad::KeyEventHandler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent<K> {
    /// Mapped value from the configuration's keymap.
    pub key: K,
    /// The state the keypad transitioned to.
    pub state: KeyState,
}

/// Opaque handle to a registered keypad instance.
///
/// Invalidated by removal; holding an id across a remove/add pair can alias a
/// reused slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadId(pub(crate) usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_derives_pull_direction() {
        assert_eq!(ActiveLevel::Low.input_pin_mode(), PinMode::InputPullUp);
        assert_eq!(ActiveLevel::High.input_pin_mode(), PinMode::InputPullDown);
    }

    #[test]
    fn polarity_pin_levels() {
        assert_eq!(ActiveLevel::Low.pin_level(), PinLevel::Low);
        assert_eq!(ActiveLevel::Low.inactive_pin_level(), PinLevel::High);
        assert_eq!(ActiveLevel::High.pin_level(), PinLevel::High);
        assert_eq!(ActiveLevel::High.inactive_pin_level(), PinLevel::Low);
    }

    #[test]
    fn pin_level_toggles() {
        assert_eq!(PinLevel::Low.toggled(), PinLevel::High);
        assert_eq!(PinLevel::High.toggled().toggled(), PinLevel::High);
    }
}
