//! Shopping cart module.
//!
//! Contains the cart mapping, the store that mirrors it, the command
//! dispatch surface and the quantity stepper.

mod command;
mod sequencer;
mod state;
mod stepper;
mod store;

pub use command::{CartCommand, QUANTITY_FIELD_PREFIX};
pub use state::CartState;
pub use stepper::QuantityStepper;
pub use store::{Badge, CartBackend, CartStore, CartSummary, CartView};
