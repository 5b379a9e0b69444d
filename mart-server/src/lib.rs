//! Bonus Mart — loyalty-points backend
//!
//! Users register, authenticate, and upload purchase-receipt numbers that an
//! external accrual system later scores. This crate provides:
//!
//! - **Authentication** (`auth`): JWT bearer tokens + Argon2 credential handling
//! - **Order ingestion** (`services`): checksum-validated, idempotent uploads
//! - **Database** (`db`): embedded SurrealDB storage behind capability traits
//! - **HTTP API** (`api`): axum routes, handlers, and middleware assembly
//!
//! # Module structure
//!
//! ```text
//! mart-server/src/
//! ├── core/          # Config, state, server
//! ├── auth/          # JWT, passwords, auth gate
//! ├── services/      # Checksum, user + order workflows
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Models and repositories
//! └── common/        # Logging, error conversions
//! ```

pub mod api;
pub mod auth;
pub mod common;
pub mod core;
pub mod db;
pub mod services;

// Re-export public types
pub use auth::{AuthUser, JwtConfig, JwtService};
pub use core::{Config, Server, ServerState};
pub use services::{OrderService, UserService};

// Re-export logger functions
pub use common::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

// Security logging macro - events land in the permanent security log
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ )____  ____  __  _______
  / __  / __ \/ __ \/ / / / ___/
 / /_/ / /_/ / / / / /_/ (__  )
/_____/\____/_/ /_/\__,_/____/
    __  ___           __
   /  |/  /___ ______/ /_
  / /|_/ / __ `/ ___/ __/
 / /  / / /_/ / /  / /_
/_/  /_/\__,_/_/   \__/
    "#
    );
}
