use dvisual_core::{binder::FileModel, controller::UPLOAD_PATH, upload::FILE_FIELD};
use maud::{html, Markup};

/// The upload form: one file input per bound variable and a submit button.
///
/// `assets/file-model.js` picks up the `data-*` attributes to bind the inputs
/// and submit in the background. Without it the browser posts the form itself,
/// with the same two parts.
pub fn upload_view() -> Markup {
    let models = FileModel::ALL
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    html! {
        main {
            h1 { "Upload files" }
            form id="upload-form" action=(UPLOAD_PATH) method="post" enctype="multipart/form-data"
                data-models=(models) data-field=(FILE_FIELD) {
                @for (i, model) in FileModel::ALL.iter().enumerate() {
                    label for=(model.as_str()) { "File " (i + 1) ":" }
                    input id=(model.as_str()) type="file" name=(FILE_FIELD) data-file-model=(model.as_str());
                }
                button type="submit" { "Upload" }
            }
        }
    }
}
