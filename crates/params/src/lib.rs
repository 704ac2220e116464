//! Constant values for a5cipher operations
//!
//! This crate provides the register geometry, key layout and PCM sample
//! ranges shared across the a5cipher workspace.

#![no_std]

pub mod a51;
pub mod pcm;
