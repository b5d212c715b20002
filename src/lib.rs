// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustauth
// File: lib.rs

//! Secret-key message authentication.
//!
//! The [`auth`] module provides a generic [`auth::Authenticator`] that
//! enforces the shared MAC contract (key-length validation,
//! constant-time tag verification) over pluggable algorithm variants
//! such as [`auth::HmacSha256`].

pub mod auth;
