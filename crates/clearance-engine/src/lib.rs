//! Clearance Engine
//!
//! Pure domain logic for the agent scanner: the codename template catalog
//! and selector, the clearance status draw, the synthetic codename
//! generator, and the passport photo normalizer.
//!
//! Everything here is synchronous and I/O free. Randomness is injected as
//! `rand::Rng` parameters so the service can pass `StdRng::from_entropy()`
//! in production and a seeded rng in tests.

pub mod clearance;
pub mod codename;
pub mod photo;
pub mod templates;

pub use clearance::draw_status;
pub use templates::{pick, pick_template, AgentTemplate, CATALOG};
