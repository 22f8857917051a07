//! # RoMo Rust Backend
//!
//! Rocket-launch and moon-phase analytics engine.
//!
//! This crate provides a Rust backend for the RoMo (Rockets & Moon) system.
//! It ingests rocket-launch records from the Launch Library 2 API and lunar
//! phase events from the USNO API, persists them through a repository layer,
//! and derives chart-ready aggregations for the React frontend. The backend
//! exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Ingestion**: Per-year fetch of launches (with pagination) and moon
//!   phases, idempotent against already-populated years
//! - **Analysis**: Success rate per moon phase, launch-status distribution,
//!   and launches-per-month timeline
//! - **Chart Cache**: Read-through/write-through memoization of computed
//!   chart payloads, keyed by (year, chart kind)
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for chart responses
//! - [`models`]: Domain entities (launches, moon phases, cache entries)
//! - [`db`]: Repository pattern and persistence layer
//! - [`services`]: Aggregation logic and the nearest-phase resolver
//! - [`ingest`]: Clients for the external data providers
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod config;
pub mod db;
pub mod models;

pub mod ingest;

pub mod services;

pub mod http;
