use serde::Serialize;

/// Simple acknowledgment body shared by endpoints that have nothing
/// else to return (register, logout, update, delete)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
