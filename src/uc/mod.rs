pub mod block;
mod block_table;
pub mod char_data;
mod char_data_table;
pub mod character;
pub mod error;
pub mod props;
pub mod script;
mod script_table;
pub mod surrogate;
pub mod traverse;

/// Version of the Unicode standard the compiled-in tables follow.
pub const UNICODE_VERSION: (u8, u8, u8) = char_data_table::UNICODE_VERSION;
