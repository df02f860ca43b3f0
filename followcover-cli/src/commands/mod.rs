pub mod common;
pub mod cover;
pub mod degrees;
pub mod export;
pub mod info;
