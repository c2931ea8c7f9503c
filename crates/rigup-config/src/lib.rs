pub mod descriptor;
pub mod dev;
pub mod environment;
pub mod error;
pub mod mode;
pub mod optimize;
pub mod output;
pub mod plugins;
pub mod resolve;
pub mod rules;
pub mod settings;
pub mod validation;

// Re-export main types
pub use descriptor::*;
pub use dev::*;
pub use environment::{
    discover_host, Environment, HostAddress, NetInterface, StaticEnvironment, SystemEnvironment,
};
pub use error::*;
pub use mode::*;
pub use optimize::*;
pub use output::*;
pub use plugins::*;
pub use resolve::*;
pub use rules::*;
pub use settings::*;

// Re-export validation
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
