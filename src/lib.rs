pub mod cli;
pub mod commands;
pub mod common;
pub mod constants;
pub mod error;
pub mod ipv4_utils;
pub mod output;
pub mod parse;
pub mod parse_ipv4;
pub mod process;

pub use error::{AppError, ValidationError};
pub use ipv4_utils::AddressRange;
pub use parse::CidrBlock;
pub use parse_ipv4::Ipv4Address;
pub use process::is_address_in_cidr;
