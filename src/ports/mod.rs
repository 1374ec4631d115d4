//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the file-selection surface into the application
//! - Outbound: Called by the application into infrastructure and the host

pub mod inbound;
pub mod outbound;

pub use inbound::ImportPort;
pub use outbound::{FileTextReader, ImportHandler, NotificationSink};
