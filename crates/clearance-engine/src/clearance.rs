//! Clearance status draw
//!
//! One uniform roll decides the scan outcome: 65% approved agent,
//! 20% double agent, 15% imposter.

use backstage_common::ClearanceStatus;
use rand::Rng;

/// Rolls below this are approved.
pub const APPROVED_CEILING: f64 = 0.65;

/// Rolls below this (and at or above [`APPROVED_CEILING`]) are double agents.
pub const DOUBLE_AGENT_CEILING: f64 = 0.85;

/// Draw a clearance status from one uniform roll in `[0, 1)`.
pub fn draw_status<R: Rng + ?Sized>(rng: &mut R) -> ClearanceStatus {
    status_for_roll(rng.gen())
}

/// Map a roll in `[0, 1)` onto a status. Boundary values land upward:
/// 0.65 is a double agent, 0.85 is an imposter.
pub fn status_for_roll(roll: f64) -> ClearanceStatus {
    if roll < APPROVED_CEILING {
        ClearanceStatus::Approved
    } else if roll < DOUBLE_AGENT_CEILING {
        ClearanceStatus::DoubleAgent
    } else {
        ClearanceStatus::Imposter
    }
}
