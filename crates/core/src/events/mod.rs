pub mod bus;
pub mod domain_event;

pub use bus::{EventBus, EventListener};
pub use domain_event::{DomainEvent, EventKind};
