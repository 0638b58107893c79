pub mod prelude;

pub mod dish;
pub mod ingredient;
pub mod restaurant;
