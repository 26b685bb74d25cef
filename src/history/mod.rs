mod driver;
mod memory;

use std::sync::Arc;

pub use driver::RoutingDriver;
pub use memory::MemoryHistory;

use crate::types::Location;

/// Callback invoked with every location a [`History`] settles on.
pub type LocationListener = Arc<dyn Fn(&Location) + Send + Sync>;

/// Navigation state owned outside the router.
pub trait History {
    fn push(&self, location: Location);
    fn replace(&self, location: Location);
    fn current(&self) -> Location;

    /// Registers `listener`, calls it once with the current location, then again
    /// after every change. The sequence has no end.
    fn subscribe(&self, listener: LocationListener);
}
