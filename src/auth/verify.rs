// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustauth
// File: verify.rs

//! Constant-time tag comparison.

use subtle::{Choice, ConstantTimeEq};

/// Compares a candidate tag against the expected tag in constant
/// time.
///
/// The comparison XORs every corresponding byte pair and folds the
/// differences together with OR, producing a single boolean only at
/// the end; it never short-circuits on the first differing byte. A
/// candidate of the wrong length still pays for a full-width
/// comparison (against a same-length reference) before the `false`
/// result, so a length mismatch costs the same work as a content
/// mismatch. Tag length is public; only tag content is secret.
pub fn tags_match(expected: &[u8], candidate: &[u8]) -> bool {
	let length_ok =
		Choice::from(u8::from(candidate.len() == expected.len()));
	let reference = if candidate.len() == expected.len() {
		candidate
	} else {
		expected
	};
	let content_ok = expected.ct_eq(reference);
	bool::from(length_ok & content_ok)
}
