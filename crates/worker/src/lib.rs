//! Worker primitives for the dimmer: task spawning and keyed debounce
//! timers.

pub mod debounce;
mod spawn;
mod token;

pub use debounce::Debouncer;
