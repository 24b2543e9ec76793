//! License identity canonicalization and bundled license bodies.
//!
//! - [`canonical`] — static table mapping known license URLs and names to a
//!   canonical key; URL wins over name when both are known.
//! - [`text`] — bundled license body text selected by canonical key, with a
//!   missing-text fallback for known keys that ship no body.

pub mod canonical;
pub mod text;
