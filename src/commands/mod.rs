pub mod decode;
pub mod init_config;
pub mod plot;
