//! Supporting utilities used by models.
//!
//! These APIs are public because they're useful to callers validating their
//! own inputs, but they are not stable.

pub mod constraint;
