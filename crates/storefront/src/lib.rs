//! Bazarek Storefront - marketplace state layer.
//!
//! This crate implements the client-side state of the Bazarek marketplace:
//! authentication, user profile, shopping cart, and accessibility settings,
//! all persisted through a pluggable key-value [`storage`] adapter, plus
//! read-only [`catalog`] access and client-side [`filter`]ing.
//!
//! # Architecture
//!
//! - Stores are plain objects injected at the composition root ([`state::AppState`]);
//!   one shared instance per running UI session, no globals.
//! - Every mutation persists the owning store's whole blob under a fixed key.
//! - The only asynchronous operations are the two catalog read queries.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod filter;
pub mod forms;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
