use crate::RestaurantForm;
use ::entity::prelude::Restaurant;
use ::entity::{dish, ingredient, restaurant};
use sea_orm::prelude::Decimal;
use sea_orm::*;

pub struct Mutation;

impl Mutation {
    pub async fn create_restaurant(
        db: &DbConn,
        form_data: RestaurantForm,
    ) -> Result<restaurant::Model, DbErr> {
        restaurant::ActiveModel {
            name: Set(form_data.name),
            address_first_line: Set(form_data.address_first_line),
            phone_number: Set(form_data.phone_number),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn update_restaurant_by_id(
        db: &DbConn,
        id: i32,
        form_data: RestaurantForm,
    ) -> Result<restaurant::Model, DbErr> {
        let restaurant: restaurant::ActiveModel = Restaurant::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Cannot find restaurant {id}.")))
            .map(Into::into)?;

        restaurant::ActiveModel {
            id: restaurant.id,
            name: Set(form_data.name),
            address_first_line: Set(form_data.address_first_line),
            phone_number: Set(form_data.phone_number),
        }
        .update(db)
        .await
    }

    /// Deletes a restaurant together with its dishes (cascaded by the schema).
    pub async fn delete_restaurant(db: &DbConn, id: i32) -> Result<DeleteResult, DbErr> {
        let restaurant: restaurant::ActiveModel = Restaurant::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Cannot find restaurant {id}.")))
            .map(Into::into)?;

        restaurant.delete(db).await
    }

    pub async fn delete_all_restaurants(db: &DbConn) -> Result<DeleteResult, DbErr> {
        Restaurant::delete_many().exec(db).await
    }

    pub async fn create_dish(
        db: &DbConn,
        restaurant_id: i32,
        name: &str,
        price: Decimal,
    ) -> Result<dish::Model, DbErr> {
        dish::ActiveModel {
            name: Set(name.to_owned()),
            price: Set(price),
            restaurant_id: Set(restaurant_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn create_ingredient(
        db: &DbConn,
        name: &str,
        unit_price: Decimal,
    ) -> Result<ingredient::Model, DbErr> {
        ingredient::ActiveModel {
            name: Set(name.to_owned()),
            unit_price: Set(unit_price),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}
