use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;
use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let message = self.0.current_context().to_string();
        let status = match self.0.current_context() {
            KernelError::DuplicateEmail | KernelError::DuplicateProduct => StatusCode::CONFLICT,
            KernelError::CustomerNotFound | KernelError::InexistentProduct(_) => {
                StatusCode::NOT_FOUND
            }
            KernelError::EmptyProducts | KernelError::UnavailableQuantity(_) => {
                StatusCode::BAD_REQUEST
            }
            KernelError::Concurrency => StatusCode::CONFLICT,
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, message).into_response()
    }
}
