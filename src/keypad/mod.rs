pub mod config;
pub mod driver;
pub mod error;
pub mod handler;
pub mod instance;
pub mod mode;
pub mod registry;
pub(crate) mod scan;
pub mod shared;
pub mod store;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::KeypadConfig;
pub use driver::PinDriver;
pub use error::KeypadError;
pub use handler::KeyEventHandler;
pub use instance::Keypad;
pub use mode::{ColumnInput, RowInput, ScanMode};
pub use registry::{ChainRegistry, KeypadRegistry, SlotRegistry};
pub use shared::SharedKeypads;
pub use store::{ChainStore, InstanceStore, SlotStore};
pub use types::{ActiveLevel, HandleStatus, KeyEvent, KeyState, KeypadId, PinLevel, PinMode};

pub mod prelude {
    pub use super::{
        ActiveLevel, ChainRegistry, ChainStore, ColumnInput, HandleStatus, InstanceStore,
        KeyEvent, KeyEventHandler, KeyState, Keypad, KeypadConfig, KeypadError, KeypadId,
        KeypadRegistry, PinDriver, PinLevel, PinMode, RowInput, ScanMode, SharedKeypads,
        SlotRegistry, SlotStore,
    };
}
