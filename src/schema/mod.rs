pub mod category;
pub mod request;
