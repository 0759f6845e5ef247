//! The per-tick scan engine and registration-time pin setup.
//!
//! One shared implementation serves both scan modes; a [`ScanMode`] only
//! decides which pin slice is driven and how coordinates address the keymap.

use crate::keypad::config::KeypadConfig;
use crate::keypad::driver::PinDriver;
use crate::keypad::handler::KeyEventHandler;
use crate::keypad::instance::Keypad;
use crate::keypad::mode::ScanMode;
use crate::keypad::types::{ActiveLevel, KeyEvent, KeyState, PinMode};

/// Configures a keypad's pins when an instance is registered.
pub(crate) fn init_pins<M, D, K>(
    driver: &mut D,
    config: &KeypadConfig<'_, D::Pin, K>,
    active_level: ActiveLevel,
) where
    M: ScanMode,
    D: PinDriver,
{
    let inactive = active_level.inactive_pin_level();
    for pin in M::output_pins(config) {
        // Pre-drive inactive so the line cannot glitch active when it
        // switches to output mode.
        driver.write_pin(pin, inactive);
        driver.init_pin(pin, PinMode::Output);
    }
    let input_mode = active_level.input_pin_mode();
    for pin in M::input_pins(config) {
        driver.init_pin(pin, input_mode);
    }
}

/// Releases a keypad's pins when an instance is removed.
pub(crate) fn deinit_pins<M, D, K>(driver: &mut D, config: &KeypadConfig<'_, D::Pin, K>)
where
    M: ScanMode,
    D: PinDriver,
{
    for pin in M::output_pins(config) {
        driver.deinit_pin(pin);
    }
    for pin in M::input_pins(config) {
        driver.deinit_pin(pin);
    }
}

/// Advances one keypad by a single state-machine step.
///
/// From `Idle` this is a full matrix scan: every output line is driven in
/// turn and every input line sampled; the scan runs through all output lines,
/// so with several keys down the last matching pair wins. The matched output
/// line is left driven active so the confirmation reads on the following
/// ticks are electrically meaningful; it is restored to inactive when the key
/// releases.
///
/// Outside `Idle` only the recorded input line is re-read: still active means
/// `Hold` (re-entered every tick), inactive means `Released`, which resets to
/// `Idle` within the same call.
pub(crate) fn step<M, D, K, H>(driver: &mut D, keypad: &mut Keypad<'_, D::Pin, K, H>)
where
    M: ScanMode,
    D: PinDriver,
    K: Copy,
    H: KeyEventHandler<K>,
{
    let Some(config) = keypad.config else {
        return;
    };
    let active = keypad.active_level.pin_level();
    let inactive = active.toggled();
    let outputs = M::output_pins(config);
    let inputs = M::input_pins(config);

    if keypad.state == KeyState::Idle {
        let mut found = None;
        for (out_index, out_pin) in outputs.iter().enumerate() {
            driver.write_pin(out_pin, active);
            for (in_index, in_pin) in inputs.iter().enumerate() {
                if driver.read_pin(in_pin) == active {
                    found = Some((out_index, in_index));
                    break;
                }
            }
            driver.write_pin(out_pin, inactive);
        }

        match found {
            Some((out_index, in_index)) => {
                keypad.state = KeyState::Pressed;
                keypad.out_index = out_index;
                keypad.in_index = in_index;
                driver.write_pin(&outputs[out_index], active);

                let event = KeyEvent {
                    key: M::key(config, out_index, in_index),
                    state: KeyState::Pressed,
                };
                if let Some(handler) = keypad.handler.as_mut() {
                    let _ = handler.on_pressed(event);
                }
            }
            None => {
                if let Some(handler) = keypad.handler.as_mut() {
                    let _ = handler.on_idle();
                }
            }
        }
    } else {
        let out_index = keypad.out_index;
        let in_index = keypad.in_index;
        let key = M::key(config, out_index, in_index);

        if driver.read_pin(&inputs[in_index]) == active {
            keypad.state = KeyState::Hold;
            let event = KeyEvent {
                key,
                state: KeyState::Hold,
            };
            if let Some(handler) = keypad.handler.as_mut() {
                let _ = handler.on_hold(event);
            }
        } else {
            keypad.state = KeyState::Released;
            let event = KeyEvent {
                key,
                state: KeyState::Released,
            };
            if let Some(handler) = keypad.handler.as_mut() {
                let _ = handler.on_released(event);
            }
            keypad.state = KeyState::Idle;
            driver.write_pin(&outputs[out_index], inactive);
        }
    }
}
