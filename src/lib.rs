pub mod configure;
pub mod logger;
pub mod transfer;
