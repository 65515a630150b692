pub mod html;
pub mod init;
pub mod render;
pub mod schema;

mod helper;
