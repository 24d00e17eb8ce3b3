//! Constant-time scalar multiplication for short Weierstrass elliptic
//! curves, for Nebula
//!
//! This crate provides a scalar-multiplication engine for curves of the
//! form `y² = x³ − 3x + b` over a prime field — the shape used by NIST
//! P-256, among others. It computes `k·P` using Montgomery-form field
//! arithmetic, Renes–Costello–Batina complete addition formulas, a
//! fixed-width windowed ladder, and side-channel-aware table lookups.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! components are dependency-free, explicit in their semantics, and
//! suitable for security-critical code.
//!
//! # Module overview
//!
//! - `os`
//!   Environment-facing entropy source backing the CSPRNG.
//!
//! - `primitives`
//!   Fixed-size, low-level cryptographic primitives such as `U256`. Used
//!   internally by `rng`.
//!
//! - `rng`
//!   A ChaCha20-based CSPRNG, reused by the test suite as a deterministic
//!   seed source for random scalars and blinding factors.
//!
//! - `ec`
//!   The scalar-multiplication engine: Montgomery field arithmetic,
//!   complete-addition kernels, protected table lookups, the arbitrary-point
//!   and P-256 generator ladders, blinding, and the public `Point` API.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between cryptographic code and supporting utilities
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for Nebula's internal cryptographic needs.

mod os;

pub mod ec;
pub mod primitives;
pub mod rng;
