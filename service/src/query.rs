use ::entity::{dish, ingredient, restaurant};
use ::entity::prelude::{Dish, Ingredient, Restaurant};
use sea_orm::*;

pub struct Query;

impl Query {
    pub async fn find_restaurant_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<restaurant::Model>, DbErr> {
        Restaurant::find_by_id(id).one(db).await
    }

    /// Every restaurant, oldest first.
    pub async fn find_restaurants(db: &DbConn) -> Result<Vec<restaurant::Model>, DbErr> {
        Restaurant::find()
            .order_by_asc(restaurant::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_dishes_by_restaurant(
        db: &DbConn,
        restaurant_id: i32,
    ) -> Result<Vec<dish::Model>, DbErr> {
        Dish::find()
            .filter(dish::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(dish::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_ingredients(db: &DbConn) -> Result<Vec<ingredient::Model>, DbErr> {
        Ingredient::find()
            .order_by_asc(ingredient::Column::Id)
            .all(db)
            .await
    }
}
