//! Demo API - minimal HTTP service for validating Kubernetes deployments
//!
//! This library exposes the router and its building blocks for testing.

pub mod common;
pub mod config;
pub mod routes;
