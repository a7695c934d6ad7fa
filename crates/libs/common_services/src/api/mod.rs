pub mod albums;
pub mod thumbnail;
