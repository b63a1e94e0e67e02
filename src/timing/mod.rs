//! Timing domain: busy locks and per-entity deferred task queues.
//!
//! Everything that "waits" in gameplay code is a countdown advanced by the
//! frame tick. Nothing here touches the ECS directly; owners embed these
//! types in their components and tick them from their own systems, so a
//! despawned owner takes its pending work with it.

mod busy;
mod tasks;
#[cfg(test)]
mod tests;

pub use busy::BusyLock;
pub use tasks::{TaskId, TaskQueue};
