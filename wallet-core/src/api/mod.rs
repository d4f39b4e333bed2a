#[allow(clippy::module_inception)]
mod api;

pub use self::api::*;
