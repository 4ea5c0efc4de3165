pub mod colors;
pub mod date;
pub mod formatting;
pub mod line;
pub mod path;
pub mod table;
