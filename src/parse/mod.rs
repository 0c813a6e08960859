pub mod command;
pub mod tokenize;
pub mod types;

pub use command::add_arguments;
pub use tokenize::tokenize;
pub use types::Token;
