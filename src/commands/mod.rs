//! Command implementations

mod analyze;
mod context;
mod draft;
mod init;
mod invite;
mod pending;
mod record;
mod remind;
mod send;
mod stats;

pub use analyze::analyze;
pub use draft::draft;
pub use init::init;
pub use invite::invite;
pub use pending::pending;
pub use record::{RecordInput, record};
pub use remind::remind;
pub use send::SendOptions;
pub use stats::stats;
