pub mod check;
pub mod dump;
pub mod input;
pub mod tokens;
