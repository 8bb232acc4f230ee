use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use treeclip::app::{App, treeclip_home};
use treeclip::infra::clipboard::SystemClipboard;
use treeclip::infra::fs_source::LocalDirectorySource;

const LOG_FILE: &str = "treeclip.log";

/// Pick files from a folder tree and copy them as one block of text.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Folder to scan. Defaults to the current directory.
    folder: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    init_logging()?;

    let folder = match cli.folder {
        Some(folder) => folder,
        None => std::env::current_dir()?,
    };
    let root_dir = folder.canonicalize().map_err(|error| {
        io::Error::new(
            error.kind(),
            format!("cannot open {}: {error}", folder.display()),
        )
    })?;

    let source = Arc::new(LocalDirectorySource::new(root_dir.clone()));
    let clipboard = Box::new(SystemClipboard::new());

    let mut app = App::new(&root_dir, source, clipboard).await?;

    treeclip::runtime::run(&mut app).await
}

/// Logs go to a file under `~/.treeclip`; stderr belongs to the terminal UI.
fn init_logging() -> io::Result<()> {
    let home = treeclip_home();
    std::fs::create_dir_all(&home)?;
    let log_file = std::fs::File::create(home.join(LOG_FILE))?;

    tracing_subscriber::fmt()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
