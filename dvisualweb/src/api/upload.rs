use axum::{extract::Multipart, Json};
use sha2::{Digest, Sha256};
use tracing::{info, instrument};

use crate::{api::models::UploadResult, error::ApiResult};

/// Note that this is a multipart post - each part that is uploaded is once
/// around the loop. Parts may share a field name. Nothing is stored and the
/// reply is always `{"result": false}`.
#[instrument(skip_all)]
pub async fn post_files(mut multipart: Multipart) -> ApiResult<Json<UploadResult>> {
    let mut parts = 0;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        let hash = Sha256::digest(&data);

        info!(
            "Length of `{name}` ({file_name:?}: {content_type:?}) is {} bytes, hash = {hash:x}",
            data.len()
        );
        parts += 1;
    }

    info!("Received {parts} part(s)");
    Ok(Json(UploadResult { result: false }))
}
