//! Allocation-aware type aliases shared by the traversal engine.
//!
//! The crate is `no_std` compatible: without the `std` feature every
//! collection comes from `alloc`, and the `HashMap`-backed keyed traversal is
//! unavailable.
pub mod alloc_type;
