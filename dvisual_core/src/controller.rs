use log::{debug, warn};
use tokio::task::JoinHandle;
use url::Url;

use crate::{
    binder::UploadDraft,
    upload::{UploadClient, UploadRequest},
    UploadError,
};

/// Where every submit goes, relative to the server's base URL.
pub const UPLOAD_PATH: &str = "/fileUploadAPI";

/// Collects the two bound files and hands them to the [`UploadClient`].
#[derive(Debug, Clone)]
pub struct SubmitController {
    client: UploadClient,
    upload_url: Url,
}

impl SubmitController {
    pub fn new(client: UploadClient, server: &Url) -> Result<Self, UploadError> {
        let upload_url = server.join(UPLOAD_PATH)?;
        Ok(Self { client, upload_url })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    /// Starts an upload of the draft's files and returns straight away.
    ///
    /// The outcome is logged and then dropped: a failed upload is
    /// indistinguishable from a pending one to the caller. The returned handle
    /// only tells you when the request has finished. The draft is not
    /// modified.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime, as `tokio::spawn` does.
    pub fn submit(&self, draft: &UploadDraft) -> JoinHandle<()> {
        let handles = draft.handles();
        debug!("{handles:?}");

        let request = UploadRequest::new(handles, self.upload_url.clone());
        let client = self.client.clone();

        tokio::spawn(async move {
            match client.upload(request).await {
                Ok(response) if !response.status.is_success() => {
                    warn!("Upload was answered with {}", response.status);
                }
                Ok(_) => {}
                Err(err) => warn!("Upload failed: {err}"),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::{
        binder::{FileInput, FileModel},
        file_handle::FileHandle,
    };

    fn handle(name: &str) -> FileHandle {
        FileHandle::new(name, name.as_bytes().to_vec(), "text/plain")
    }

    fn draft_with(first: Option<&str>, second: Option<&str>) -> UploadDraft {
        let mut draft = UploadDraft::new();
        FileInput::bind(FileModel::MyFile).on_change(&mut draft, first.map(handle));
        FileInput::bind(FileModel::MyFile2).on_change(&mut draft, second.map(handle));
        draft
    }

    async fn upload_server(expected: u64) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(UPLOAD_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":false}"#))
            .expect(expected)
            .mount(&server)
            .await;
        server
    }

    fn controller_for(server: &MockServer) -> SubmitController {
        let base = Url::parse(&server.uri()).unwrap();
        SubmitController::new(UploadClient::new(), &base).unwrap()
    }

    #[test]
    fn upload_path_replaces_base_path() {
        let base = Url::parse("http://localhost:5000/some/page").unwrap();
        let controller = SubmitController::new(UploadClient::new(), &base).unwrap();
        assert_eq!(
            controller.upload_url().as_str(),
            "http://localhost:5000/fileUploadAPI"
        );
    }

    #[tokio::test]
    async fn submit_posts_both_files_once_in_selection_order() {
        let server = upload_server(1).await;
        let draft = draft_with(Some("a.txt"), Some("b.txt"));

        controller_for(&server).submit(&draft).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body = String::from_utf8_lossy(&requests[0].body);
        assert_eq!(body.matches(r#"name="file""#).count(), 2);
        assert!(body.find("a.txt").unwrap() < body.find("b.txt").unwrap());
    }

    #[tokio::test]
    async fn submit_with_one_file_sends_one_populated_part() {
        let server = upload_server(1).await;
        let draft = draft_with(None, Some("b.txt"));

        controller_for(&server).submit(&draft).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body);
        assert_eq!(body.matches(r#"name="file""#).count(), 2);
        assert_eq!(body.matches("filename=").count(), 1);
    }

    #[tokio::test]
    async fn repeated_submits_are_independent_requests() {
        let server = upload_server(2).await;
        let draft = draft_with(Some("a.txt"), Some("b.txt"));
        let controller = controller_for(&server);

        let first = controller.submit(&draft);
        let second = controller.submit(&draft);
        first.await.unwrap();
        second.await.unwrap();
    }

    #[tokio::test]
    async fn unparseable_mime_type_does_not_stop_the_upload() {
        let server = upload_server(1).await;
        let mut draft = UploadDraft::new();
        FileInput::bind(FileModel::MyFile).on_change(
            &mut draft,
            Some(FileHandle::new("a", b"x".to_vec(), "weird type")),
        );

        controller_for(&server).submit(&draft).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body);
        assert_eq!(body.matches("filename=").count(), 1);
    }

    #[test]
    #[should_panic]
    fn submit_outside_a_runtime_panics() {
        let base = Url::parse("http://127.0.0.1:9").unwrap();
        let controller = SubmitController::new(UploadClient::new(), &base).unwrap();
        let _ = controller.submit(&UploadDraft::new());
    }

    #[tokio::test]
    async fn rejected_upload_is_swallowed_and_draft_untouched() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let base = Url::parse(&format!("http://127.0.0.1:{port}")).unwrap();
        let controller = SubmitController::new(UploadClient::new(), &base).unwrap();
        let draft = draft_with(Some("a.txt"), Some("b.txt"));
        let before = draft.clone();

        assert!(controller.submit(&draft).await.is_ok());
        assert_eq!(draft, before);
    }
}
