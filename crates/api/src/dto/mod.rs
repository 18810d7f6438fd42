pub mod request;
pub mod response;

pub use request::{AiBreakdownRequest, AiCreateRequest, CreateTodoRequest, UpdateTodoRequest};
pub use response::{AiBreakdownResponse, Envelope, HealthResponse};
