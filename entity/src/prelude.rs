pub use super::dish::Entity as Dish;
pub use super::ingredient::Entity as Ingredient;
pub use super::restaurant::Entity as Restaurant;
