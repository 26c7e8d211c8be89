pub mod events;
pub mod lookup;
pub mod state;
