//! # IO Module
//!
//! Interface layer that exposes the domain over HTTP.

pub mod rest;
