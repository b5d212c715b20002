// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustauth
// File: hmacsha256.rs

//! HMAC-SHA-256 algorithm variant.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::algorithm::AuthAlgorithm;

type HmacSha256Core = Hmac<Sha256>;

/// HMAC-SHA-256 with the NaCl `crypto_auth` parameters: a 32-byte
/// key and a 32-byte tag.
pub struct HmacSha256;

impl AuthAlgorithm for HmacSha256 {
	const KEY_BYTES: usize = 32;
	const TAG_BYTES: usize = 32;
	const NAME: &'static str = "HMAC-SHA256";

	fn compute(key: &[u8], message: &[u8]) -> Vec<u8> {
		// The wrapper has already checked the key length, and HMAC
		// itself accepts any length, so construction cannot fail
		// here.
		let mut mac = HmacSha256Core::new_from_slice(key)
			.unwrap_or_else(|_| {
				unreachable!("HMAC accepts keys of any length")
			});
		mac.update(message);
		mac.finalize().into_bytes().to_vec()
	}
}
