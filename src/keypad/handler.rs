use crate::keypad::types::{HandleStatus, KeyEvent};

/// Receives key transitions from the scan engine.
///
/// The trait covers both callback styles through default methods:
///
/// - **Unified**: implement only [`on_event`](Self::on_event); every
///   transition funnels through it.
/// - **Per-state**: override [`on_pressed`](Self::on_pressed),
///   [`on_hold`](Self::on_hold) and [`on_released`](Self::on_released)
///   individually.
///
/// [`on_idle`](Self::on_idle) fires on every full scan that finds no key; the
/// default does nothing.
///
/// A handler value is owned by its keypad instance, so per-keypad context
/// lives in the handler itself and is reachable through
/// [`KeypadRegistry::handler_mut`](crate::keypad::KeypadRegistry::handler_mut).
pub trait KeyEventHandler<K> {
    /// Catch-all for transitions not overridden individually.
    fn on_event(&mut self, event: KeyEvent<K>) -> HandleStatus {
        let _ = event;
        HandleStatus::NotHandled
    }

    /// A key was detected during a full scan.
    fn on_pressed(&mut self, event: KeyEvent<K>) -> HandleStatus {
        self.on_event(event)
    }

    /// The detected key is still down; fires every tick it remains so.
    fn on_hold(&mut self, event: KeyEvent<K>) -> HandleStatus {
        self.on_event(event)
    }

    /// The detected key went up.
    fn on_released(&mut self, event: KeyEvent<K>) -> HandleStatus {
        self.on_event(event)
    }

    /// A full scan found no key down.
    fn on_idle(&mut self) -> HandleStatus {
        HandleStatus::NotHandled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::types::KeyState;

    #[test]
    fn per_state_methods_default_to_on_event() {
        struct Unified {
            seen: usize,
        }

        impl KeyEventHandler<u8> for Unified {
            fn on_event(&mut self, _event: KeyEvent<u8>) -> HandleStatus {
                self.seen += 1;
                HandleStatus::Handled
            }
        }

        let mut handler = Unified { seen: 0 };
        let event = KeyEvent {
            key: 7u8,
            state: KeyState::Pressed,
        };
        handler.on_pressed(event);
        handler.on_hold(KeyEvent {
            state: KeyState::Hold,
            ..event
        });
        handler.on_released(KeyEvent {
            state: KeyState::Released,
            ..event
        });
        assert_eq!(handler.seen, 3);
    }

    #[test]
    fn on_idle_defaults_to_not_handled() {
        struct Silent;
        impl KeyEventHandler<u8> for Silent {}

        assert_eq!(Silent.on_idle(), HandleStatus::NotHandled);
    }
}
