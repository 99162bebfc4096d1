//! todos_core - the functional core of the todos project.
//!
//! Pure data types, ordering rules and storage contracts. Nothing in this
//! crate performs I/O; the `todos` crate supplies the executor and verifier
//! implementations and drives them.

pub mod auth;
pub mod storage;
pub mod todo;
