use serde::{Deserialize, Serialize};

/// Body of the reply to an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub result: bool,
}
