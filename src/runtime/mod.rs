//! Managed Java runtime (JBR) artifact naming
//!
//! - [`host`]: Host OS/architecture facts and architecture token detection
//! - [`jbr`]: Build-identifier reconstruction across the naming eras

pub mod host;
pub mod jbr;

pub use host::{HostInfo, OperatingSystem, detect_arch};
pub use jbr::build_identifier;
