pub mod init;
pub mod lines;
pub mod pad;
