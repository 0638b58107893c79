use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use restaurant_service::sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Db(DbErr),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(message) => Self::NotFound(message),
            err => Self::Db(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => {
                tracing::debug!(%message, "not found");
                (StatusCode::NOT_FOUND, "Not found").into_response()
            }
            err => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_404() {
        let err = AppError::from(DbErr::RecordNotFound("Cannot find restaurant 3.".to_owned()));

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_db_errors_map_to_500() {
        let err = AppError::from(DbErr::Custom("boom".to_owned()));

        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
