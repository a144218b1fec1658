//! A thin wrapper around a single multipart POST.

use log::{debug, info, warn};
use mime_guess::{mime, Mime};
use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use url::Url;

use crate::{file_handle::FileHandle, UploadError};

/// Every file is sent under this field name, so a request carrying two files
/// has two parts called `file`.
pub const FILE_FIELD: &str = "file";

/// The files to send, in order, and where to send them. A slot that was never
/// filled is `None` and goes out as an empty part.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    handles: Vec<Option<FileHandle>>,
    destination: Url,
}

impl UploadRequest {
    pub fn new(handles: Vec<Option<FileHandle>>, destination: Url) -> Self {
        Self {
            handles,
            destination,
        }
    }

    pub fn handles(&self) -> &[Option<FileHandle>] {
        &self.handles
    }

    pub fn destination(&self) -> &Url {
        &self.destination
    }
}

/// What the server sent back. Nobody interprets it beyond logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct UploadClient {
    http: Client,
}

impl UploadClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// Sends one POST with a multipart body. The `Content-Type` header is left
    /// to reqwest, which adds the boundary it generated.
    ///
    /// There is no retry, timeout or cancellation. Non-2xx replies are still
    /// returned as `Ok`; only transport failures are errors.
    pub async fn upload(&self, request: UploadRequest) -> Result<UploadResponse, UploadError> {
        let UploadRequest {
            handles,
            destination,
        } = request;

        debug!("POST {destination} with {} part(s)", handles.len());
        let form = build_form(handles)?;
        let response = self.http.post(destination).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        let response = UploadResponse { status, body };
        info!("{response:?}");

        Ok(response)
    }
}

fn build_form(handles: Vec<Option<FileHandle>>) -> Result<Form, UploadError> {
    handles
        .into_iter()
        .try_fold(Form::new(), |form, handle| -> Result<Form, UploadError> {
            match handle {
                Some(handle) => {
                    let (name, content, mime_type) = handle.into_parts();
                    let mime_type = part_mime_type(&name, &mime_type);
                    let part = Part::bytes(content)
                        .file_name(name)
                        .mime_str(mime_type.as_ref())?;
                    Ok(form.part(FILE_FIELD, part))
                }
                None => Ok(form.text(FILE_FIELD, "")),
            }
        })
}

/// The type sent for a part. A handle's type is never a reason to hold the
/// file back, so one that does not parse goes out as `application/octet-stream`.
fn part_mime_type(name: &str, mime_type: &str) -> Mime {
    mime_type.parse().unwrap_or_else(|_| {
        warn!(
            "{name:?} has unparseable MIME type {mime_type:?}, sending it as {}",
            mime::APPLICATION_OCTET_STREAM
        );
        mime::APPLICATION_OCTET_STREAM
    })
}
