//! Menu actions, one module per entity.
//!
//! Every action is a one-shot request/response pair against the store:
//! read the choice sources it needs, prompt, write, print the result.
//! Missing prerequisites short-circuit with a message before any write.

pub mod departments;
pub mod employees;
pub mod roles;
