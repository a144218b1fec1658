use std::path::PathBuf;

use clap::{arg, command, Parser};
use dvisual_core::binder::FileModel;
use url::Url;

pub fn parse_args() -> Args {
    // wild expands globs on Windows, where the shell does not.
    Args::parse_from(wild::args_os())
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        short,
        long,
        env = "DVISUAL_SERVER",
        default_value = "http://localhost:5000",
        help = "Base URL of the server. Files are posted to /fileUploadAPI on this server."
    )]
    pub server: Url,

    #[arg(help = "The first file to upload, bound to 'myFile'.")]
    pub file: Option<PathBuf>,

    #[arg(help = "The second file to upload, bound to 'myFile2'.")]
    pub file2: Option<PathBuf>,
}

impl Args {
    /// The files given on the command line, paired with the variable each one
    /// is bound to.
    pub fn selections(&self) -> Vec<(FileModel, &PathBuf)> {
        [
            (FileModel::MyFile, self.file.as_ref()),
            (FileModel::MyFile2, self.file2.as_ref()),
        ]
        .into_iter()
        .filter_map(|(model, path)| path.map(|p| (model, p)))
        .collect()
    }
}
