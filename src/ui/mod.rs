pub mod printer;
pub mod span;
pub mod style;
pub mod view;
