// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustauth
// Module: auth (secret-key authenticators)

//! Shared entry point for secret-key message authentication.
//! Submodules provide the algorithm contract, the generic
//! authenticator wrapper, the concrete variants, and the
//! constant-time tag comparison.

pub mod algorithm;
pub mod authenticator;
pub mod error;
pub mod hmacsha256;
pub mod verify;

pub use algorithm::AuthAlgorithm;
pub use authenticator::{authenticate_with, verify_with, Authenticator};
pub use error::{AuthError, AuthErrorKind};
pub use hmacsha256::HmacSha256;
