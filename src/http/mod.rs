pub mod cors;
pub mod handler;
pub mod response;
