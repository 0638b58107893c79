use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Response};
use entity::restaurant;
use restaurant_service::sea_orm::DbConn;
use restaurant_service::{FormErrors, Mutation, Query, RestaurantForm};
use serde::Serialize;
use tower_cookies::Cookies;

use crate::AppState;
use crate::error::AppError;
use crate::flash::{FlashData, post_response, take_flash_cookie};

const RESTAURANT_LIST_URL: &str = "/restaurants/";

#[derive(Serialize)]
struct FormField {
    name: &'static str,
    label: &'static str,
    value: String,
    errors: Vec<String>,
}

fn form_fields(form: &RestaurantForm, errors: &FormErrors) -> Vec<FormField> {
    let field = |name: &'static str, label: &'static str, value: &str| FormField {
        name,
        label,
        value: value.to_owned(),
        errors: errors.get(name).cloned().unwrap_or_default(),
    };

    vec![
        field("name", "Name", &form.name),
        field("address_first_line", "Address", &form.address_first_line),
        field("phone_number", "Phone number", &form.phone_number),
    ]
}

fn render(state: &AppState, template: &str, ctx: &tera::Context) -> Result<Html<String>, AppError> {
    let body = state.templates.render(template, ctx)?;
    Ok(Html(body))
}

fn render_form(
    state: &AppState,
    title: &str,
    action: &str,
    form: &RestaurantForm,
    errors: &FormErrors,
) -> Result<Html<String>, AppError> {
    let mut ctx = tera::Context::new();
    ctx.insert("title", title);
    ctx.insert("action", action);
    ctx.insert("fields", &form_fields(form, errors));

    render(state, "restaurant_form.html", &ctx)
}

async fn find_restaurant(conn: &DbConn, id: i32) -> Result<restaurant::Model, AppError> {
    Query::find_restaurant_by_id(conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cannot find restaurant {id}.")))
}

fn edit_url(id: i32) -> String {
    format!("/restaurants/{id}/edit/")
}

pub async fn list_restaurants(
    state: State<AppState>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let restaurants = Query::find_restaurants(&state.conn).await?;

    let mut ctx = tera::Context::new();
    ctx.insert("restaurants", &restaurants);

    if let Some(value) = take_flash_cookie::<FlashData>(&cookies) {
        ctx.insert("flash", &value);
    }

    render(&state, "restaurant_list.html", &ctx)
}

pub async fn new_restaurant(state: State<AppState>) -> Result<Html<String>, AppError> {
    render_form(
        &state,
        "New restaurant",
        "/restaurants/new/",
        &RestaurantForm::default(),
        &FormErrors::new(),
    )
}

pub async fn create_restaurant(
    state: State<AppState>,
    cookies: Cookies,
    Form(form): Form<RestaurantForm>,
) -> Result<Response, AppError> {
    let cleaned = match form.clone().clean() {
        Ok(cleaned) => cleaned,
        Err(errors) => {
            tracing::debug!(?errors, "invalid restaurant submission");
            let page = render_form(&state, "New restaurant", "/restaurants/new/", &form, &errors)?;
            return Ok(page.into_response());
        }
    };

    let restaurant = Mutation::create_restaurant(&state.conn, cleaned).await?;
    tracing::info!(id = restaurant.id, name = %restaurant.name, "restaurant created");

    let data = FlashData::success("Restaurant successfully added");

    Ok(post_response(&cookies, data, RESTAURANT_LIST_URL).into_response())
}

pub async fn edit_restaurant(
    state: State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let restaurant = find_restaurant(&state.conn, id).await?;

    render_form(
        &state,
        "Edit restaurant",
        &edit_url(id),
        &RestaurantForm::from(&restaurant),
        &FormErrors::new(),
    )
}

pub async fn update_restaurant(
    state: State<AppState>,
    Path(id): Path<i32>,
    cookies: Cookies,
    Form(form): Form<RestaurantForm>,
) -> Result<Response, AppError> {
    find_restaurant(&state.conn, id).await?;

    let cleaned = match form.clone().clean() {
        Ok(cleaned) => cleaned,
        Err(errors) => {
            tracing::debug!(id, ?errors, "invalid restaurant submission");
            let page = render_form(&state, "Edit restaurant", &edit_url(id), &form, &errors)?;
            return Ok(page.into_response());
        }
    };

    let restaurant = Mutation::update_restaurant_by_id(&state.conn, id, cleaned).await?;
    tracing::info!(id = restaurant.id, name = %restaurant.name, "restaurant updated");

    let data = FlashData::success("Restaurant successfully updated");

    Ok(post_response(&cookies, data, RESTAURANT_LIST_URL).into_response())
}

pub async fn confirm_delete_restaurant(
    state: State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let restaurant = find_restaurant(&state.conn, id).await?;

    let mut ctx = tera::Context::new();
    ctx.insert("restaurant", &restaurant);

    render(&state, "restaurant_confirm_delete.html", &ctx)
}

pub async fn delete_restaurant(
    state: State<AppState>,
    Path(id): Path<i32>,
    cookies: Cookies,
) -> Result<Response, AppError> {
    Mutation::delete_restaurant(&state.conn, id).await?;
    tracing::info!(id, "restaurant deleted");

    let data = FlashData::success("Restaurant successfully deleted");

    Ok(post_response(&cookies, data, RESTAURANT_LIST_URL).into_response())
}
