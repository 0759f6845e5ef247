//! A `no_std`, no-alloc matrix keypad scanner for embedded systems.
//!
//! This crate scans one or more matrix-wired keypads attached to GPIO lines,
//! tracks each keypad through a per-tick state machine, and reports key
//! transitions to application code through a handler trait. It is built for
//! resource-constrained targets: no heap, no threads, no blocking I/O.
//!
//! # Features
//!
//! - **Zero heap allocation** - All storage statically allocated
//! - **Driver agnostic** - Pins are accessed through a four-operation trait
//! - **Two storage strategies** - Fixed slot array or linked node chain
//! - **Two scan modes** - Row-input or column-input, one shared engine
//! - **Per-keypad polarity** - Active-low and active-high matrices can coexist
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐  add/remove   ┌──────────────────────────┐
//! │  Application    │──────────────▶│  KeypadRegistry          │
//! │                 │               │                          │
//! │  KeypadConfig   │◀──borrowed────│  SlotStore / ChainStore  │
//! │  (pins, keymap) │               │  (live Keypad instances) │
//! │                 │               │                          │
//! │  KeyEventHandler│◀──callbacks───│  scan() ── one state-    │
//! │  (on_pressed..) │               │  machine step per tick   │
//! └─────────────────┘               └───────────┬──────────────┘
//!                                               │ init/read/write
//!                                               ▼
//!                                        ┌─────────────┐
//!                                        │  PinDriver  │
//!                                        └─────────────┘
//! ```
//!
//! The application owns the pin descriptions and keymap; the registry borrows
//! them for the lifetime of the registration. `scan()` must be invoked on a
//! fixed cadence (20-50 ms is typical) from a timer or scheduler tick; each
//! call advances every enabled keypad by exactly one state-machine step. The
//! registry takes `&mut self` and never locks internally; callers that scan
//! from an interrupt wrap the registry in
//! [`SharedKeypads`](keypad::SharedKeypads).
//!
//! # Example
//!
//! ```rust,no_run
//! use embedded_keyscan::prelude::*;
//!
//! // The pin type is chosen by the driver; plain ids here.
//! struct Gpio;
//!
//! impl PinDriver for Gpio {
//!     type Pin = u8;
//!     fn init_pin(&mut self, _pin: &u8, _mode: PinMode) {}
//!     fn read_pin(&mut self, _pin: &u8) -> PinLevel {
//!         PinLevel::High
//!     }
//!     fn write_pin(&mut self, _pin: &u8, _level: PinLevel) {}
//! }
//!
//! struct Beeper;
//!
//! impl KeyEventHandler<char> for Beeper {
//!     fn on_pressed(&mut self, event: KeyEvent<char>) -> HandleStatus {
//!         // start a tone for event.key ...
//!         let _ = event;
//!         HandleStatus::NotHandled
//!     }
//! }
//!
//! let columns = [0u8, 1];
//! let rows = [2u8, 3];
//! let keymap = ['1', '2', '3', '4'];
//! let config = KeypadConfig::new(&keymap, &columns, &rows).unwrap();
//!
//! let mut keypads: SlotRegistry<'_, Gpio, RowInput, char, Beeper, 2> =
//!     KeypadRegistry::new(Gpio);
//! let id = keypads.add(&config, Beeper).unwrap();
//! # let _ = id;
//!
//! loop {
//!     // Invoke from a 20-50 ms periodic trigger.
//!     keypads.scan();
//! }
//! ```

#![deny(unsafe_code)]
#![no_std]

pub mod keypad;

pub mod prelude {
    pub use crate::keypad::prelude::*;
}
