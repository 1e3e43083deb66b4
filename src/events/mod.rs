pub mod host;
pub mod window;

pub use host::{HostItem, HostRequest, HostResponse};
pub use window::{DisplayItem, WindowRecord};
