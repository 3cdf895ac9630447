//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the marketplace: API endpoints,
//! business rules, data access and background jobs. The backend uses Axum as the
//! web framework, SeaORM for database operations and utoipa for the OpenAPI
//! document.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, state transitions and notifications
//! - **Data Layer** (`data/`) - Repositories over SeaORM entities
//! - **Model Layer** (`model/`) - Validated parameter types and entity-to-DTO conversion
//! - **Error Layer** (`error/`) - Application error types and bilingual HTTP responses
//! - **Middleware** (`middleware/`) - Identity header resolution and role guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, migrations and CORS
//! - **Router** (`router`) - Route table, OpenAPI document and Swagger UI
//! - **Scheduler** (`scheduler/`) - Cron jobs such as lease expiry reminders
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; CORS, rate limiting and tracing layers run first
//! 2. **Controller** resolves the caller from `X-Open-Id` and checks roles
//! 3. **Controller** converts the DTO to params and calls a service
//! 4. **Service** enforces ownership and transition rules, calls repositories and
//!    sends notifications
//! 5. **Controller** converts the returned entity model to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
