//! The registry: owns the pin driver, stores instances and runs scan ticks.

use core::marker::PhantomData;

use crate::keypad::config::KeypadConfig;
use crate::keypad::driver::PinDriver;
use crate::keypad::error::KeypadError;
use crate::keypad::handler::KeyEventHandler;
use crate::keypad::mode::ScanMode;
use crate::keypad::scan;
use crate::keypad::store::{ChainStore, InstanceStore, SlotStore};
use crate::keypad::types::{ActiveLevel, KeyState, KeypadId};

/// Owns the pin driver and a set of keypad instances, and advances them all
/// by one debounce step per [`scan`](KeypadRegistry::scan) call.
///
/// The storage strategy is a type parameter; [`SlotRegistry`] and
/// [`ChainRegistry`] name the two provided ones. All mutation goes through
/// `&mut self`, so a registry shared with an interrupt context needs a
/// [`SharedKeypads`](crate::keypad::SharedKeypads) wrapper.
pub struct KeypadRegistry<'a, D, M, K, H, S>
where
    D: PinDriver,
    D::Pin: 'a,
    K: 'a,
    S: InstanceStore<'a, D::Pin, K, H>,
{
    driver: D,
    store: S,
    default_active_level: ActiveLevel,
    _marker: PhantomData<(&'a (), M, K, H)>,
}

/// Registry over fixed slot storage with capacity `N`.
pub type SlotRegistry<'a, D, M, K, H, const N: usize> =
    KeypadRegistry<'a, D, M, K, H, SlotStore<'a, <D as PinDriver>::Pin, K, H, N>>;

/// Registry over chain storage with an `N`-node pool.
pub type ChainRegistry<'a, D, M, K, H, const N: usize> =
    KeypadRegistry<'a, D, M, K, H, ChainStore<'a, <D as PinDriver>::Pin, K, H, N>>;

impl<'a, D, M, K, H, S> KeypadRegistry<'a, D, M, K, H, S>
where
    D: PinDriver,
    D::Pin: 'a,
    M: ScanMode,
    K: Copy + 'a,
    H: KeyEventHandler<K>,
    S: InstanceStore<'a, D::Pin, K, H>,
{
    /// Creates an empty registry; newly added keypads default to active-low
    /// wiring.
    pub fn new(driver: D) -> Self
    where
        S: Default,
    {
        Self::with_active_level(driver, ActiveLevel::default())
    }

    /// Creates an empty registry with an explicit default polarity for newly
    /// added keypads.
    pub fn with_active_level(driver: D, active_level: ActiveLevel) -> Self
    where
        S: Default,
    {
        Self {
            driver,
            store: S::default(),
            default_active_level: active_level,
            _marker: PhantomData,
        }
    }

    /// Polarity applied to keypads added after this point.
    pub fn default_active_level(&self) -> ActiveLevel {
        self.default_active_level
    }

    pub fn set_default_active_level(&mut self, active_level: ActiveLevel) {
        self.default_active_level = active_level;
    }

    /// Registers a keypad and configures its pins: output lines are driven
    /// inactive and switched to output mode, input lines get the pull implied
    /// by the polarity.
    ///
    /// # Errors
    /// [`KeypadError::AlreadyRegistered`] if this configuration is already
    /// bound to a live instance, [`KeypadError::CapacityExhausted`] if
    /// storage is full.
    pub fn add(
        &mut self,
        config: &'a KeypadConfig<'a, D::Pin, K>,
        handler: H,
    ) -> Result<KeypadId, KeypadError> {
        if self.store.find(config).is_some() {
            return Err(KeypadError::AlreadyRegistered);
        }
        let id = self
            .store
            .insert(config, handler, self.default_active_level)?;
        scan::init_pins::<M, D, K>(&mut self.driver, config, self.default_active_level);
        Ok(id)
    }

    /// Deregisters a keypad, releasing its pins through the driver first.
    ///
    /// # Errors
    /// [`KeypadError::NotFound`] if the id does not name a live instance.
    /// Removal is idempotent.
    pub fn remove(&mut self, id: KeypadId) -> Result<(), KeypadError> {
        let config = self
            .store
            .get(id)
            .ok_or(KeypadError::NotFound)?
            .config
            .ok_or(KeypadError::NotFound)?;
        scan::deinit_pins::<M, D, K>(&mut self.driver, config);
        self.store.remove(id)
    }

    /// Looks up the live instance bound to a configuration, by reference
    /// identity.
    pub fn find(&self, config: &KeypadConfig<'a, D::Pin, K>) -> Option<KeypadId> {
        self.store.find(config)
    }

    pub fn config_of(
        &self,
        id: KeypadId,
    ) -> Result<&'a KeypadConfig<'a, D::Pin, K>, KeypadError> {
        self.store
            .get(id)
            .and_then(|keypad| keypad.config)
            .ok_or(KeypadError::NotFound)
    }

    /// Rebinds an instance to a different configuration and re-initializes
    /// pins for it. The state machine restarts from `Idle`.
    ///
    /// # Errors
    /// [`KeypadError::AlreadyRegistered`] if another live instance is bound
    /// to `config`; rebinding an instance to its own configuration is a
    /// no-op.
    pub fn set_config(
        &mut self,
        id: KeypadId,
        config: &'a KeypadConfig<'a, D::Pin, K>,
    ) -> Result<(), KeypadError> {
        if let Some(existing) = self.store.find(config) {
            if existing == id {
                return Ok(());
            }
            return Err(KeypadError::AlreadyRegistered);
        }
        let active_level = {
            let keypad = self.store.get_mut(id).ok_or(KeypadError::NotFound)?;
            keypad.config = Some(config);
            keypad.state = KeyState::Idle;
            keypad.active_level
        };
        scan::init_pins::<M, D, K>(&mut self.driver, config, active_level);
        Ok(())
    }

    pub fn active_level(&self, id: KeypadId) -> Result<ActiveLevel, KeypadError> {
        self.store
            .get(id)
            .map(|keypad| keypad.active_level)
            .ok_or(KeypadError::NotFound)
    }

    /// Changes an instance's polarity and re-initializes its pins, since the
    /// pull direction and the idle output level both follow from it. The
    /// state machine restarts from `Idle`.
    pub fn set_active_level(
        &mut self,
        id: KeypadId,
        active_level: ActiveLevel,
    ) -> Result<(), KeypadError> {
        let config = {
            let keypad = self.store.get_mut(id).ok_or(KeypadError::NotFound)?;
            keypad.active_level = active_level;
            keypad.state = KeyState::Idle;
            keypad.config
        };
        if let Some(config) = config {
            scan::init_pins::<M, D, K>(&mut self.driver, config, active_level);
        }
        Ok(())
    }

    pub fn is_enabled(&self, id: KeypadId) -> Result<bool, KeypadError> {
        self.store
            .get(id)
            .map(|keypad| keypad.is_enabled())
            .ok_or(KeypadError::NotFound)
    }

    /// Disabled instances stay registered and keep their pins, but scan ticks
    /// skip them; state and coordinates freeze until re-enabled.
    pub fn set_enabled(&mut self, id: KeypadId, enabled: bool) -> Result<(), KeypadError> {
        self.store
            .get_mut(id)
            .map(|keypad| keypad.set_enabled(enabled))
            .ok_or(KeypadError::NotFound)
    }

    pub fn state_of(&self, id: KeypadId) -> Result<KeyState, KeypadError> {
        self.store
            .get(id)
            .map(|keypad| keypad.state())
            .ok_or(KeypadError::NotFound)
    }

    pub fn handler(&self, id: KeypadId) -> Result<&H, KeypadError> {
        self.store
            .get(id)
            .and_then(|keypad| keypad.handler())
            .ok_or(KeypadError::NotFound)
    }

    pub fn handler_mut(&mut self, id: KeypadId) -> Result<&mut H, KeypadError> {
        self.store
            .get_mut(id)
            .and_then(|keypad| keypad.handler_mut())
            .ok_or(KeypadError::NotFound)
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Consumes the registry, returning the driver. Pins of still-registered
    /// keypads are not released.
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Advances every enabled instance by one debounce step.
    ///
    /// Call this at a fixed period; the period is the debounce interval.
    /// Disabled instances are skipped without touching their pins.
    pub fn scan(&mut self) {
        let driver = &mut self.driver;
        self.store.for_each_mut(|keypad| {
            if !keypad.is_enabled() {
                return;
            }
            scan::step::<M, D, K, H>(driver, keypad);
        });
    }
}
