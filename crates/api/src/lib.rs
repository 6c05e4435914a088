// Eventbook API Library
// Decision: Shared library for binaries (API server, OpenAPI export) and router tests

// API routes and types
pub mod api;

// Router assembly
pub mod app;

// Environment configuration
pub mod config;

// Services layer
pub mod services;
pub use services::EventService;

// Storage layer
pub mod storage;

// OpenAPI document generation
pub mod openapi;
