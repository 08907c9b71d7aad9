//! Build-configuration resolution for the rinki front-end bundle.
//!
//! A single flag (`NODE_ENV`) and a project root are turned into a complete
//! [`BuildConfiguration`] whose serialized form follows the bundler's
//! configuration schema. Resolution itself never fails; only loading the
//! optional project settings file can.

pub mod bundle;
pub mod dev;
pub mod error;
pub mod mode;
pub mod resolver;
pub mod settings;

// Re-export main types
pub use bundle::*;
pub use dev::*;
pub use error::*;
pub use mode::{BuildEnv, Mode};
pub use resolver::ConfigResolver;
pub use settings::{ProjectLayout, ProjectSettings};
