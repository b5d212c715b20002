// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustauth
// File: error.rs

//! Error definitions for the authenticator contract.

use std::borrow::Cow;

/// The kinds of error the authenticator core can report.
///
/// Verification mismatch is deliberately absent: a wrong or
/// wrong-length tag is a normal `false` result from
/// [`Authenticator::verify`](super::Authenticator::verify), never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
	InvalidKeyLength,
}

#[derive(Debug)]
pub struct AuthError {
	kind: AuthErrorKind,
	message: Cow<'static, str>,
}

impl AuthError {
	pub fn new(
		kind: AuthErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	/// Builds the `InvalidKeyLength` error for a key of `actual`
	/// bytes where `expected` bytes are required.
	pub fn invalid_key_length(
		algorithm: &'static str,
		expected: usize,
		actual: usize,
	) -> Self {
		Self::new(
			AuthErrorKind::InvalidKeyLength,
			format!(
				"{} requires a {}-byte key but received {} bytes",
				algorithm, expected, actual
			),
		)
	}

	pub fn kind(&self) -> AuthErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for AuthError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for AuthError {}
