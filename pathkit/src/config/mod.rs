//! Configuration system for pathkit.
//!
//! Configuration is merged from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHKIT_DIR_MODE`, `PATHKIT_LOG_MODE`)
//! 3. The configuration file (`<install root>/etc/pathkit.yaml`, or the
//!    file given to `ConfigBuilder::with_file`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use pathkit::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("new directories get mode {:o}", config.effective_dir_mode());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

// Re-export key types at module root
pub use builder::{validate, ConfigBuilder};
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, DirMode};
