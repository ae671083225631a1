// Adapters layer: concrete integrations with the outside world.

pub mod mock;
pub mod sheets;
