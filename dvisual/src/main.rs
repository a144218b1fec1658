use std::io::Write;

use anyhow::{Context, Result};
use args::{parse_args, Args};
use clap::builder::styling::AnsiColor;
use dvisual_core::{
    binder::{FileInput, FileModel, UploadDraft},
    controller::SubmitController,
    file_handle::FileHandle,
    upload::UploadClient,
};
use env_logger::Builder;
use log::{debug, info, logger, warn};
use logging_timer::time;

mod args;

pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

#[tokio::main]
async fn main() -> Result<()> {
    configure_logging();
    main2().await?;
    logger().flush();
    Ok(())
}

async fn main2() -> Result<()> {
    info!("Starting {PROGRAM_NAME}");

    let args = parse_args();
    debug!("{:?}", &args);

    let draft = select_files(&args)?;
    let controller = SubmitController::new(UploadClient::new(), &args.server)?;
    info!("Uploading to {}", controller.upload_url());

    // The upload runs in the background. We only wait so that the process
    // does not exit before the request has gone out; its outcome has already
    // been logged by the time this returns.
    controller.submit(&draft).await?;

    Ok(())
}

/// Reads every file named on the command line and binds it to its variable,
/// exactly as if it had been picked in the corresponding file input.
#[time]
fn select_files(args: &Args) -> Result<UploadDraft> {
    let mut draft = UploadDraft::new();

    for (model, path) in args.selections() {
        let handle = FileHandle::from_path(path)
            .with_context(|| format!("Cannot select {path:?} for '{model}'"))?;
        FileInput::bind(model).on_change(&mut draft, Some(handle));
    }

    if FileModel::ALL.iter().all(|m| draft.get(*m).is_none()) {
        warn!("No files specified, the request will only carry empty parts");
    }

    Ok(draft)
}

fn configure_logging() {
    let mut builder = Builder::from_default_env();

    builder.format(|buf, record| {
        let level_style = buf.default_level_style(record.level());
        let level_style = match record.level() {
            log::Level::Error => level_style.fg_color(Some(AnsiColor::Red.into())),
            log::Level::Warn => level_style.fg_color(Some(AnsiColor::Yellow.into())),
            log::Level::Info => level_style.fg_color(Some(AnsiColor::Green.into())),
            log::Level::Debug => level_style.fg_color(Some(AnsiColor::Blue.into())),
            log::Level::Trace => level_style.fg_color(Some(AnsiColor::Magenta.into())),
        };

        match record.line() {
            Some(line) => writeln!(
                buf,
                "[{} {level_style}{}{level_style:#} [{}:{line}]] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            ),
            None => writeln!(
                buf,
                "[{} {level_style}{}{level_style:#}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            ),
        }
    });

    builder.init();
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use clap::Parser;

    use super::*;

    #[test]
    fn select_files_binds_each_path_to_its_model() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.json");
        std::fs::write(&a, "first").unwrap();
        std::fs::write(&b, "{}").unwrap();

        let args =
            Args::try_parse_from([OsStr::new("dvisual"), a.as_os_str(), b.as_os_str()]).unwrap();
        let draft = select_files(&args).unwrap();

        assert_eq!(draft.get(FileModel::MyFile).unwrap().name(), "a.txt");
        assert_eq!(draft.get(FileModel::MyFile2).unwrap().mime_type(), "application/json");
    }

    #[test]
    fn select_files_with_only_one_path_leaves_second_unset() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        std::fs::write(&a, "first").unwrap();

        let args = Args::try_parse_from([OsStr::new("dvisual"), a.as_os_str()]).unwrap();
        let draft = select_files(&args).unwrap();

        assert!(draft.get(FileModel::MyFile).is_some());
        assert!(draft.get(FileModel::MyFile2).is_none());
    }

    #[test]
    fn select_files_without_paths_gives_empty_draft() {
        let args = Args::try_parse_from(["dvisual"]).unwrap();
        let draft = select_files(&args).unwrap();

        assert_eq!(draft, UploadDraft::new());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let args = Args::try_parse_from([OsStr::new("dvisual"), missing.as_os_str()]).unwrap();
        let err = select_files(&args).unwrap_err();
        assert!(err.to_string().contains("myFile"));
    }
}
