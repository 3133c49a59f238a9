pub mod chart;
pub mod colors;
pub mod formatting;
pub mod table;
