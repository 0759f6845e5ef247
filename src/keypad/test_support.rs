//! Shared test fixtures: a pin driver that models matrix wiring, an
//! event-recording handler and a few canned configurations.

use heapless::Vec;

use crate::keypad::config::KeypadConfig;
use crate::keypad::driver::PinDriver;
use crate::keypad::handler::KeyEventHandler;
use crate::keypad::mode::{ColumnInput, RowInput};
use crate::keypad::registry::{ChainRegistry, KeypadRegistry, SlotRegistry};
use crate::keypad::types::{HandleStatus, KeyEvent, PinLevel, PinMode};

pub const PIN_COUNT: usize = 16;

/// Fake pin driver that records every pin operation and models the matrix
/// electrically: an input line reads active only while some closed switch
/// connects it to an output line currently driven at the active level.
pub struct MockDriver {
    active: PinLevel,
    pub driven: [PinLevel; PIN_COUNT],
    pub modes: [Option<PinMode>; PIN_COUNT],
    pub deinited: Vec<u8, PIN_COUNT>,
    closed: Vec<(u8, u8), 8>,
}

impl MockDriver {
    pub fn new(active: PinLevel) -> Self {
        Self {
            active,
            // Lines start at the inactive level, as if externally pulled.
            driven: [active.toggled(); PIN_COUNT],
            modes: [None; PIN_COUNT],
            deinited: Vec::new(),
            closed: Vec::new(),
        }
    }

    pub fn active_low() -> Self {
        Self::new(PinLevel::Low)
    }

    /// Closes the switch wired between an output pin and an input pin.
    pub fn press(&mut self, out_pin: u8, in_pin: u8) {
        let _ = self.closed.push((out_pin, in_pin));
    }

    /// Opens a previously closed switch.
    pub fn release(&mut self, out_pin: u8, in_pin: u8) {
        if let Some(position) = self
            .closed
            .iter()
            .position(|&(out, inp)| out == out_pin && inp == in_pin)
        {
            self.closed.swap_remove(position);
        }
    }
}

impl PinDriver for MockDriver {
    type Pin = u8;

    fn init_pin(&mut self, pin: &u8, mode: PinMode) {
        self.modes[*pin as usize] = Some(mode);
    }

    fn read_pin(&mut self, pin: &u8) -> PinLevel {
        let coupled = self
            .closed
            .iter()
            .any(|&(out, inp)| inp == *pin && self.driven[out as usize] == self.active);
        if coupled {
            self.active
        } else {
            self.active.toggled()
        }
    }

    fn write_pin(&mut self, pin: &u8, level: PinLevel) {
        self.driven[*pin as usize] = level;
    }

    fn deinit_pin(&mut self, pin: &u8) {
        let _ = self.deinited.push(*pin);
        self.modes[*pin as usize] = None;
    }
}

/// Handler that records every event it sees.
#[derive(Default)]
pub struct EventLog {
    pub events: Vec<KeyEvent<u8>, 16>,
    pub idle_ticks: usize,
    /// Returned from every callback; lets tests pin down that the engine
    /// ignores it.
    pub status: HandleStatus,
}

impl KeyEventHandler<u8> for EventLog {
    fn on_pressed(&mut self, event: KeyEvent<u8>) -> HandleStatus {
        let _ = self.events.push(event);
        self.status
    }

    fn on_hold(&mut self, event: KeyEvent<u8>) -> HandleStatus {
        let _ = self.events.push(event);
        self.status
    }

    fn on_released(&mut self, event: KeyEvent<u8>) -> HandleStatus {
        let _ = self.events.push(event);
        self.status
    }

    fn on_idle(&mut self) -> HandleStatus {
        self.idle_ticks += 1;
        self.status
    }
}

// 1x2 matrix from the docs: columns on pins 0 and 1, the row on pin 2.
static KEYMAP_1X2: [u8; 2] = [10, 20];
static COLUMNS_1X2: [u8; 2] = [0, 1];
static ROWS_1X2: [u8; 1] = [2];

pub fn config_1x2() -> KeypadConfig<'static, u8, u8> {
    KeypadConfig::new(&KEYMAP_1X2, &COLUMNS_1X2, &ROWS_1X2).unwrap()
}

// Same shape on disjoint pins, for multi-keypad tests.
static KEYMAP_1X2_ALT: [u8; 2] = [30, 40];
static COLUMNS_1X2_ALT: [u8; 2] = [4, 5];
static ROWS_1X2_ALT: [u8; 1] = [6];

pub fn config_1x2_alt() -> KeypadConfig<'static, u8, u8> {
    KeypadConfig::new(&KEYMAP_1X2_ALT, &COLUMNS_1X2_ALT, &ROWS_1X2_ALT).unwrap()
}

// 2x2 matrix, row-major keymap [[1, 2], [3, 4]].
static KEYMAP_2X2: [u8; 4] = [1, 2, 3, 4];
static COLUMNS_2X2: [u8; 2] = [0, 1];
static ROWS_2X2: [u8; 2] = [2, 3];

pub fn config_2x2() -> KeypadConfig<'static, u8, u8> {
    KeypadConfig::new(&KEYMAP_2X2, &COLUMNS_2X2, &ROWS_2X2).unwrap()
}

pub fn slot_registry<'a, const N: usize>(
    driver: MockDriver,
) -> SlotRegistry<'a, MockDriver, RowInput, u8, EventLog, N> {
    KeypadRegistry::new(driver)
}

pub fn chain_registry<'a, const N: usize>(
    driver: MockDriver,
) -> ChainRegistry<'a, MockDriver, RowInput, u8, EventLog, N> {
    KeypadRegistry::new(driver)
}

pub fn column_registry<'a, const N: usize>(
    driver: MockDriver,
) -> SlotRegistry<'a, MockDriver, ColumnInput, u8, EventLog, N> {
    KeypadRegistry::new(driver)
}
