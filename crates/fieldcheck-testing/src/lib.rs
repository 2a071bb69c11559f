//! Testing infrastructure for fieldcheck integration tests.
//!
//! This crate provides utilities for exercising the engine without a
//! device on the wire:
//! - `transport`: scripted `SessionProvider`/`DeviceSession` fakes with a
//!   shared activity log
//! - `probe`: fixed-answer reachability probe
//! - `fixtures`: canned `<rpc-reply>` documents in the shapes real devices
//!   produce

pub mod fixtures;
pub mod probe;
pub mod transport;

pub use probe::StaticProbe;
pub use transport::{ConnectFailure, ScriptedProvider, TransportLog};
