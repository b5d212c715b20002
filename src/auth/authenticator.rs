// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustauth
// File: authenticator.rs

//! Generic authenticator wrapper enforcing the shared MAC contract.

use std::marker::PhantomData;

use zeroize::Zeroizing;

use super::algorithm::AuthAlgorithm;
use super::error::AuthError;
use super::verify::tags_match;

/// A secret-key authenticator bound to one algorithm variant and one
/// key.
///
/// The key is validated once at construction, owned for the
/// instance's lifetime, and zeroed on drop. The instance is stateless
/// between calls: [`authenticate`](Self::authenticate) and
/// [`verify`](Self::verify) take `&self` and may run concurrently
/// from multiple threads on the same instance.
pub struct Authenticator<A: AuthAlgorithm> {
	key: Zeroizing<Vec<u8>>,
	_algorithm: PhantomData<A>,
}

impl<A: AuthAlgorithm> Authenticator<A> {
	/// Number of bytes in a valid key for the bound variant.
	pub const KEY_BYTES: usize = A::KEY_BYTES;

	/// Number of bytes in a valid tag for the bound variant.
	pub const TAG_BYTES: usize = A::TAG_BYTES;

	/// Creates an authenticator owning a copy of `key`.
	///
	/// Fails with [`AuthErrorKind::InvalidKeyLength`] unless
	/// `key.len() == A::KEY_BYTES`; the key is never truncated or
	/// padded to fit.
	///
	/// [`AuthErrorKind::InvalidKeyLength`]: super::AuthErrorKind::InvalidKeyLength
	pub fn new(key: &[u8]) -> Result<Self, AuthError> {
		if key.len() != A::KEY_BYTES {
			return Err(AuthError::invalid_key_length(
				A::NAME,
				A::KEY_BYTES,
				key.len(),
			));
		}
		Ok(Self {
			key: Zeroizing::new(key.to_vec()),
			_algorithm: PhantomData,
		})
	}

	/// Computes the `A::TAG_BYTES`-byte tag for `message`.
	///
	/// Always succeeds, for any message including the empty one, and
	/// is a deterministic pure function of (key, message).
	pub fn authenticate(&self, message: &[u8]) -> Vec<u8> {
		A::compute(&self.key, message)
	}

	/// Returns `true` iff `tag` is the exact
	/// [`authenticate`](Self::authenticate) result for `message`
	/// under the held key.
	///
	/// The comparison runs in constant time over the full tag
	/// length. A tag of the wrong length is a `false` result, not an
	/// error; it is indistinguishable from a wrong-content tag.
	pub fn verify(&self, tag: &[u8], message: &[u8]) -> bool {
		let expected = self.authenticate(message);
		tags_match(&expected, tag)
	}
}

// The key is redacted: authenticators never log or display key
// material.
impl<A: AuthAlgorithm> std::fmt::Debug for Authenticator<A> {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		f.debug_struct("Authenticator")
			.field("algorithm", &A::NAME)
			.field("key", &"<redacted>")
			.finish()
	}
}

/// One-shot tag computation under a throwaway authenticator.
///
/// Validates `key` exactly as [`Authenticator::new`] does.
pub fn authenticate_with<A: AuthAlgorithm>(
	key: &[u8],
	message: &[u8],
) -> Result<Vec<u8>, AuthError> {
	Ok(Authenticator::<A>::new(key)?.authenticate(message))
}

/// One-shot tag verification under a throwaway authenticator.
///
/// Validates `key` exactly as [`Authenticator::new`] does; the tag
/// outcome itself is the boolean, never an error.
pub fn verify_with<A: AuthAlgorithm>(
	key: &[u8],
	tag: &[u8],
	message: &[u8],
) -> Result<bool, AuthError> {
	Ok(Authenticator::<A>::new(key)?.verify(tag, message))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::auth::error::AuthErrorKind;

	/// Fixed-byte transform so the wrapper invariants are tested
	/// independently of any real hash.
	struct FixedTag;

	impl AuthAlgorithm for FixedTag {
		const KEY_BYTES: usize = 4;
		const TAG_BYTES: usize = 8;
		const NAME: &'static str = "FIXED-TAG";

		fn compute(key: &[u8], message: &[u8]) -> Vec<u8> {
			// First key byte and message length folded into a
			// recognizable pattern.
			let mut tag = vec![0xabu8; Self::TAG_BYTES];
			tag[0] = key[0];
			tag[1] = message.len() as u8;
			tag
		}
	}

	#[test]
	fn construction_rejects_short_key() {
		let err = Authenticator::<FixedTag>::new(&[0u8; 3])
			.expect_err("3-byte key must be rejected");
		assert_eq!(err.kind(), AuthErrorKind::InvalidKeyLength);
	}

	#[test]
	fn construction_rejects_long_key() {
		let err = Authenticator::<FixedTag>::new(&[0u8; 5])
			.expect_err("5-byte key must be rejected");
		assert_eq!(err.kind(), AuthErrorKind::InvalidKeyLength);
	}

	#[test]
	fn construction_accepts_exact_key() {
		assert!(Authenticator::<FixedTag>::new(&[0u8; 4]).is_ok());
	}

	#[test]
	fn invalid_key_length_message_names_lengths() {
		let err = Authenticator::<FixedTag>::new(&[0u8; 2])
			.expect_err("2-byte key must be rejected");
		assert_eq!(
			err.message(),
			"FIXED-TAG requires a 4-byte key but received 2 bytes"
		);
	}

	#[test]
	fn authenticate_delegates_to_the_variant() {
		let auth =
			Authenticator::<FixedTag>::new(&[7, 0, 0, 0]).unwrap();
		let tag = auth.authenticate(b"abc");
		assert_eq!(tag, vec![7, 3, 0xab, 0xab, 0xab, 0xab, 0xab, 0xab]);
	}

	#[test]
	fn verify_round_trips() {
		let auth =
			Authenticator::<FixedTag>::new(&[1, 2, 3, 4]).unwrap();
		let tag = auth.authenticate(b"message");
		assert!(auth.verify(&tag, b"message"));
	}

	#[test]
	fn verify_rejects_wrong_length_tag_without_error() {
		let auth =
			Authenticator::<FixedTag>::new(&[1, 2, 3, 4]).unwrap();
		let mut tag = auth.authenticate(b"message");
		tag.pop();
		assert!(!auth.verify(&tag, b"message"));
		assert!(!auth.verify(&[], b"message"));
	}

	#[test]
	fn associated_lengths_are_queryable_without_an_instance() {
		assert_eq!(Authenticator::<FixedTag>::KEY_BYTES, 4);
		assert_eq!(Authenticator::<FixedTag>::TAG_BYTES, 8);
	}

	#[test]
	fn debug_output_redacts_key() {
		let auth =
			Authenticator::<FixedTag>::new(&[9, 9, 9, 9]).unwrap();
		let rendered = format!("{:?}", auth);
		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains('9'));
	}

	#[test]
	fn one_shot_helpers_validate_the_key() {
		let err = authenticate_with::<FixedTag>(&[0u8; 3], b"x")
			.expect_err("short key must be rejected");
		assert_eq!(err.kind(), AuthErrorKind::InvalidKeyLength);

		let tag =
			authenticate_with::<FixedTag>(&[1, 2, 3, 4], b"x")
				.unwrap();
		assert!(verify_with::<FixedTag>(&[1, 2, 3, 4], &tag, b"x")
			.unwrap());
	}
}
