//! Per-endpoint service wrappers.
//!
//! Each wrapper is deliberately thin: build a [`LogicalRequest`], shape it,
//! hand the result to the transport, return the decoded JSON value. Screen
//! state, rendering and response interpretation stay with the caller.
//!
//! [`LogicalRequest`]: crate::shaper::LogicalRequest

mod code_rule;
mod user;

pub use code_rule::CodeRuleService;
pub use user::UserService;
