//! Synthetic entities for tests.
//!
//! Names come from per-factory sequences (`Restaurant 0`, `Restaurant 1`, ...)
//! so rows created in the same test never collide; the remaining fields are
//! generated with `fake`.

use std::sync::atomic::{AtomicU32, Ordering};

use ::entity::{dish, ingredient, restaurant};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, StreetName};
use fake::faker::phone_number::en::PhoneNumber;
use sea_orm::prelude::Decimal;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, Set};

use crate::RestaurantForm;

static RESTAURANT_SEQUENCE: AtomicU32 = AtomicU32::new(0);
static DISH_SEQUENCE: AtomicU32 = AtomicU32::new(0);
static INGREDIENT_SEQUENCE: AtomicU32 = AtomicU32::new(0);

fn next(sequence: &AtomicU32) -> u32 {
    sequence.fetch_add(1, Ordering::Relaxed)
}

/// A price between 1.00 and 99.99 with two decimal places.
fn fake_price() -> Decimal {
    Decimal::new((100i64..10_000).fake::<i64>(), 2)
}

fn fake_address() -> String {
    format!(
        "{} {}",
        BuildingNumber().fake::<String>(),
        StreetName().fake::<String>()
    )
}

pub struct RestaurantFactory;

impl RestaurantFactory {
    /// Field values a user could submit through the restaurant form.
    pub fn form() -> RestaurantForm {
        RestaurantForm {
            name: format!("Restaurant {}", next(&RESTAURANT_SEQUENCE)),
            address_first_line: fake_address(),
            phone_number: PhoneNumber().fake(),
        }
    }

    pub fn build() -> restaurant::ActiveModel {
        let form = Self::form();
        restaurant::ActiveModel {
            name: Set(form.name),
            address_first_line: Set(form.address_first_line),
            phone_number: Set(form.phone_number),
            ..Default::default()
        }
    }

    pub async fn create(db: &DbConn) -> Result<restaurant::Model, DbErr> {
        Self::build().insert(db).await
    }
}

pub struct DishFactory;

impl DishFactory {
    pub fn build(restaurant_id: i32) -> dish::ActiveModel {
        dish::ActiveModel {
            name: Set(format!("Dish {}", next(&DISH_SEQUENCE))),
            price: Set(fake_price()),
            restaurant_id: Set(restaurant_id),
            ..Default::default()
        }
    }

    pub async fn create(db: &DbConn, restaurant_id: i32) -> Result<dish::Model, DbErr> {
        Self::build(restaurant_id).insert(db).await
    }
}

pub struct IngredientFactory;

impl IngredientFactory {
    pub fn build() -> ingredient::ActiveModel {
        ingredient::ActiveModel {
            name: Set(format!("Ingredient {}", next(&INGREDIENT_SEQUENCE))),
            unit_price: Set(fake_price()),
            ..Default::default()
        }
    }

    pub async fn create(db: &DbConn) -> Result<ingredient::Model, DbErr> {
        Self::build().insert(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn sequences_yield_distinct_names() {
        let first = RestaurantFactory::form();
        let second = RestaurantFactory::form();

        assert!(first.name.starts_with("Restaurant "));
        assert_ne!(first.name, second.name);
    }

    #[test]
    fn generated_form_is_valid() {
        let form = RestaurantFactory::form();

        assert!(!form.address_first_line.is_empty());
        assert!(form.validate().is_ok(), "{form:?}");
    }

    #[test]
    fn prices_have_two_decimal_places() {
        for _ in 0..50 {
            let price = fake_price();
            assert_eq!(price.scale(), 2);
            assert!(price >= Decimal::new(100, 2) && price < Decimal::new(10_000, 2));
        }
    }
}
