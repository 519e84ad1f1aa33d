pub mod dto;
pub mod log;
