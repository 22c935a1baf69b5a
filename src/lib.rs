//! Orderdesk - order-management and product-catalog service
//!
//! This library provides the core functionality for the Orderdesk service:
//! token-based authentication, ownership-based order access control, order
//! read-model assembly, and the public product catalog.

pub mod access;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod orders;
pub mod pagination;
pub mod readmodel;
