// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustauth
// File: algorithm.rs

//! The algorithm-variant contract shared by all authenticators.

/// A concrete MAC algorithm pluggable into
/// [`Authenticator`](super::Authenticator).
///
/// A variant publishes its exact key and tag lengths as associated
/// constants, queryable without constructing an instance, and supplies
/// the pure keyed transform. All shared policy (key-length validation,
/// constant-time verification) lives in the wrapper; a variant adds no
/// logic beyond its constants and the delegation to its transform.
pub trait AuthAlgorithm {
	/// Number of bytes in a valid secret key.
	const KEY_BYTES: usize;

	/// Number of bytes in a valid authenticator tag.
	const TAG_BYTES: usize;

	/// Display identifier used in error text. Never carries key
	/// material.
	const NAME: &'static str;

	/// Computes the tag for `message` under `key`.
	///
	/// Callers guarantee `key.len() == Self::KEY_BYTES`; the result
	/// is always `Self::TAG_BYTES` long. Deterministic: identical
	/// (key, message) pairs yield byte-identical tags.
	fn compute(key: &[u8], message: &[u8]) -> Vec<u8>;
}
