use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
	pub message: String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("{message}")]
	BadClientDataError { message: String },
	#[display("{message}")]
	BadGatewayError { message: String },
	#[display("Internal server error")]
	InternalServerError,
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				message: self.to_string(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::BadClientDataError { .. } => StatusCode::BAD_REQUEST,
			ApiError::BadGatewayError { .. } => StatusCode::BAD_GATEWAY,
			ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}
