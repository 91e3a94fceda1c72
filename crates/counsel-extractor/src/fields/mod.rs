//! Per-field heuristics
//!
//! Each function is independent and never fails: a miss is `None` (or an
//! empty list).

pub mod address;
pub mod email;
pub mod name;
pub mod phone;
pub mod practice;
pub mod website;

pub use address::{AddressParts, PostalSelectors};
