pub mod conversion;
pub mod reference;
pub mod session;
pub mod version;
