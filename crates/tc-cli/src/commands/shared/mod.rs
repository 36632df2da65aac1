pub mod outcome;
pub mod parse;
