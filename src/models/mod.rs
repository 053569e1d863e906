pub mod diet;
pub mod recipe;
pub mod request;
