//! Runtime system
//!
//! This module contains the synchronous resolution machinery (values,
//! unwrapping, thenables) and the dual-mode facades built on top of it.

pub mod facade;
pub mod thenable;
pub mod unwrap;
pub mod value;
