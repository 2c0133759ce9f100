use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use derive_more::{Display, Error};
use diesel::result::DatabaseErrorKind;
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    error: String,
    message: String,
}

#[derive(Error, Display, Debug)]
pub enum APIError {
    #[display(fmt = "not found")]
    NotFound,

    #[display(fmt = "unauthorized")]
    Unauthorized,

    #[display(fmt = "forbidden")]
    Forbidden,

    #[display(fmt = "conflict: {}", description)]
    Conflict { description: String },

    #[display(fmt = "database error: {}", description)]
    DBError { description: String },

    #[display(fmt = "invalid value: {}", description)]
    InvalidValue { description: String },

    #[display(fmt = "internal: {}", description)]
    Internal { description: String },

    #[display(fmt = "unknown error")]
    Unknown,
}

impl APIError {
    pub fn name(&self) -> String {
        match self {
            APIError::NotFound => "NotFound".to_string(),
            APIError::Unauthorized => "Unauthorized".to_string(),
            APIError::Forbidden => "Forbidden".to_string(),
            APIError::Conflict { description: _ } => "Conflict".to_string(),
            APIError::DBError { description: _ } => "DBError".to_string(),
            APIError::InvalidValue { description: _ } => "InvalidValue".to_string(),
            APIError::Internal { description: _ } => "Internal".to_string(),
            APIError::Unknown => "Unknown".to_string(),
        }
    }
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            APIError::NotFound => StatusCode::NOT_FOUND,
            APIError::Unauthorized => StatusCode::UNAUTHORIZED,
            APIError::Forbidden => StatusCode::FORBIDDEN,
            APIError::Conflict { description: _ } => StatusCode::CONFLICT,
            APIError::DBError { description: _ } => StatusCode::INTERNAL_SERVER_ERROR,
            APIError::InvalidValue { description: _ } => StatusCode::BAD_REQUEST,
            APIError::Internal { description: _ } => StatusCode::INTERNAL_SERVER_ERROR,
            APIError::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_response = ErrorResponse {
            code: status_code.as_u16(),
            message: self.to_string(),
            error: self.name(),
        };
        HttpResponse::build(status_code).json(error_response)
    }
}

impl From<diesel::result::Error> for APIError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => APIError::NotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                APIError::Conflict {
                    description: info.message().to_string(),
                }
            }
            diesel::result::Error::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation,
                info,
            ) => APIError::Conflict {
                description: info.message().to_string(),
            },
            _ => APIError::DBError {
                description: error.to_string(),
            },
        }
    }
}

impl From<BlockingError<diesel::result::Error>> for APIError {
    fn from(error: BlockingError<diesel::result::Error>) -> Self {
        match error {
            BlockingError::Error(db_error) => APIError::from(db_error),
            BlockingError::Canceled => APIError::DBError {
                description: error.to_string(),
            },
        }
    }
}

impl From<BlockingError<APIError>> for APIError {
    fn from(error: BlockingError<APIError>) -> Self {
        match error {
            BlockingError::Error(api_error) => api_error,
            BlockingError::Canceled => APIError::DBError {
                description: format!("{}", error),
            },
        }
    }
}

impl From<r2d2::Error> for APIError {
    fn from(error: r2d2::Error) -> Self {
        APIError::DBError {
            description: error.to_string(),
        }
    }
}
