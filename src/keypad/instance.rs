use crate::keypad::config::KeypadConfig;
use crate::keypad::types::{ActiveLevel, KeyState};

/// One tracked physical keypad: configuration reference, owned handler,
/// state-machine position and status flags.
///
/// Instances live inside a registry store; applications interact with them
/// through [`KeypadRegistry`](crate::keypad::KeypadRegistry) accessors. A
/// vacant value (no configuration, `configured == false`) marks an empty
/// storage slot.
#[derive(Debug)]
pub struct Keypad<'a, P, K, H> {
    pub(crate) config: Option<&'a KeypadConfig<'a, P, K>>,
    pub(crate) handler: Option<H>,
    pub(crate) state: KeyState,
    /// Output-line index of the last detected key; meaningful outside `Idle`.
    pub(crate) out_index: usize,
    /// Input-line index of the last detected key; meaningful outside `Idle`.
    pub(crate) in_index: usize,
    pub(crate) active_level: ActiveLevel,
    pub(crate) enabled: bool,
    pub(crate) configured: bool,
}

impl<'a, P, K, H> Keypad<'a, P, K, H> {
    pub(crate) fn vacant() -> Self {
        Self {
            config: None,
            handler: None,
            state: KeyState::Idle,
            out_index: 0,
            in_index: 0,
            active_level: ActiveLevel::Low,
            enabled: false,
            configured: false,
        }
    }

    pub(crate) fn bind(
        &mut self,
        config: &'a KeypadConfig<'a, P, K>,
        handler: H,
        active_level: ActiveLevel,
    ) {
        self.config = Some(config);
        self.handler = Some(handler);
        self.state = KeyState::Idle;
        self.out_index = 0;
        self.in_index = 0;
        self.active_level = active_level;
        self.enabled = true;
        self.configured = true;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::vacant();
    }

    /// The attached configuration, if any.
    pub fn config(&self) -> Option<&'a KeypadConfig<'a, P, K>> {
        self.config
    }

    /// Current state-machine position.
    pub fn state(&self) -> KeyState {
        self.state
    }

    pub fn active_level(&self) -> ActiveLevel {
        self.active_level
    }

    /// A disabled instance stays registered but is skipped by the scan engine.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// True from successful registration until removal.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    pub fn handler_mut(&mut self) -> Option<&mut H> {
        self.handler.as_mut()
    }
}
