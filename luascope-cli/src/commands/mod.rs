pub mod common;
pub mod decode;
pub mod encode;
