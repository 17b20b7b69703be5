pub mod translit;
pub mod unicode;
