pub mod controller;
pub mod effect;
pub mod event;
pub mod texts;
pub mod transition;

pub use controller::{DialogueController, Transport, TransportError};
pub use effect::{Keyboard, Outbound};
pub use event::Event;
