pub mod helper;

pub use helper::DanishHelper;
