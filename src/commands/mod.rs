pub mod doctor;
pub mod init;
pub mod instructions;
pub mod links;
pub mod route;
