//! Rule tables: the validated `TableSet`, its TOML configuration form, and
//! the built-in language sets.

pub(crate) mod config;
pub(crate) mod german;
pub(crate) mod table_set;
