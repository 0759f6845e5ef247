use crate::keypad::types::{PinLevel, PinMode};

/// The pin operations the scan engine needs, supplied once per registry.
///
/// Implementations translate to the target's GPIO layer. Operations are
/// infallible by contract: drivers that can fail must handle or report that
/// below this abstraction.
pub trait PinDriver {
    /// How the application identifies a physical pin (port/pin pair, bitmask,
    /// plain index, ...).
    type Pin;

    /// Configures a pin. Called once per pin when an instance is registered.
    fn init_pin(&mut self, pin: &Self::Pin, mode: PinMode);

    /// Samples the instantaneous logic level of an input pin.
    fn read_pin(&mut self, pin: &Self::Pin) -> PinLevel;

    /// Drives an output pin to the given level.
    fn write_pin(&mut self, pin: &Self::Pin, level: PinLevel);

    /// Restores a pin to a neutral mode. Called once per pin when an instance
    /// is removed; the default does nothing.
    fn deinit_pin(&mut self, pin: &Self::Pin) {
        let _ = pin;
    }
}
