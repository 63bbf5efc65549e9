pub mod change;
pub mod markup_style;
pub mod segment;
