pub mod dir;
pub mod error;
pub mod fixture;
pub mod manifest;
pub mod reader;
pub mod resolver;

pub use dir::IgnitionDir;
pub use error::{Error, Result};
pub use fixture::{bind_or_deploy, Binding};
pub use manifest::{ContractRecord, DeploymentManifest};
pub use reader::{ManifestReader, DEFAULT_NETWORK};
pub use resolver::AddressResolver;
