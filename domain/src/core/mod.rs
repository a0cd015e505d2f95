//! Core domain concepts shared across all subdomains.
//!
//! - [`error::InputError`]: invalid caller input (empty query fields, bad ids)
//! - [`error::TokenError`]: a service-assigned token that is unsafe to embed
//! - [`string`]: file-name sanitization and token character rules

pub mod error;
pub mod string;
