//! Application layer: services orchestrating the domain store.

pub mod services;
