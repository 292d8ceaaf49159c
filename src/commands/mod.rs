pub mod convert;
pub mod interactive;
pub mod reference;
pub mod version;
