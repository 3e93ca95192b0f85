mod archive;
mod args;
mod context;
mod error;
mod format;
mod result;
mod utils;

use args::Args;
use context::Context;
use format::Format;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args { verbose, tar, path } = Args::parse();

    // Resolve the directory to package and the file name to leave out
    let source_dir = utils::resolve_source_dir(path.as_deref())?;
    let exclude = utils::self_name();

    // Create context
    let ctx = Context::new(source_dir, exclude, verbose)?;

    let format = if tar { Format::TarGz } else { Format::Zip };

    // Use cliclack for nice UI
    cliclack::intro("repack")?;

    let spinner = cliclack::spinner();
    spinner.start(format!("Creating {} archive...", format));

    let result = match format {
        Format::Zip => archive::create_zip(&ctx),
        Format::TarGz => archive::create_tar_gz(&ctx),
    };

    let archive_path = match result {
        Ok(path) => {
            spinner.stop(format!("Packaged {}", ctx.name));
            path
        }
        Err(e) => {
            spinner.error("Packaging failed");
            return Err(e);
        }
    };

    cliclack::outro(format!("Archive written to {}", archive_path.display()))?;
    Ok(())
}
