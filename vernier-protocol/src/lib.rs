//! Caliper Serial-Shift Wire Protocol
//!
//! This crate holds all wire-format knowledge for the two-wire clock/data
//! interface spoken by cheap digital calipers and micrometers. The device
//! clocks out one measurement frame at a time:
//!
//! ```text
//! first bit shifted in ──────────────────────▶ last bit shifted in
//! ┌──────────────────────────────┬──────┬─────────┬──────┐
//! │ magnitude (20 bits, MSB 1st) │ sign │ (spare) │ unit │
//! └──────────────────────────────┴──────┴─────────┴──────┘
//!                                bit 3              bit 0   (in the
//!                                                   accumulated packet)
//! ```
//!
//! There is no start bit, no stop bit, and no checksum. Frame boundaries are
//! inferred purely from timing: a clock edge arriving after more than
//! [`INTER_PACKET_GAP_MS`] of silence starts a new frame. This is fragile by
//! construction - a single late or jittered edge merges two frames or splits
//! one in half, and nothing downstream can tell a corrupt frame from a valid
//! one. The next correctly-framed packet simply supersedes it.

#![no_std]
#![deny(unsafe_code)]

pub mod capture;
pub mod frame;
pub mod measurement;

pub use capture::{classify_edge, BitCapture, FrameBoundary, INTER_PACKET_GAP_MS};
pub use frame::{reverse_field, Packet, FIELD_BITS, FLAG_MASK, MAGNITUDE_MASK};
pub use measurement::{Line, Measurement, Unit, LINE_CAPACITY};
