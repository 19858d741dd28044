//! HTTP API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! tower-sessions for cookie sessions persisted next to the application data.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, ownership checks, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Content-type check, validation, auth gate, sessions and rate limiting
//! - **Validation** (`validation/`) - Declarative per-route field rules
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Initialization of database, sessions, and background tasks
//! - **Router** (`router`) - Route table and application-wide layers
//! - **Docs** (`docs`) - OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** applies CORS, tracing, rate limiting and sessions, then routes the request
//! 2. **Middleware** rejects non-JSON bodies, runs the route's validation rules and, on
//!    protected routes, resolves the session's user
//! 3. **Controller** loads the target, checks ownership, converts DTOs to params, calls the service
//! 4. **Service** runs entity checks and orchestrates data operations
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and wraps it in an envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
