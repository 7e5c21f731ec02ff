use folio::{AlbumLoader, FolioError, TypesetFontRegistry};
use itertools::Itertools;
use std::env;
use std::process;

fn usage(program: &str) -> ! {
    eprintln!("Validates an album description and prints its resolved pages as JSON.");
    eprintln!();
    eprintln!(
        "Usage: {} [--lenient] [--quiet] [--search <dir>]... <path/to/album.json>",
        program
    );
    eprintln!("       {} --fonts", program);
    eprintln!();
    eprintln!("  --lenient        print the partial album even when errors were found");
    eprintln!("  --quiet          do not log diagnostics as they are found");
    eprintln!("  --search <dir>   also look for images in <dir>");
    eprintln!("  --fonts          list the available font families");
    process::exit(1);
}

/// A small CLI checking an album description and dumping its display list.
fn main() -> Result<(), FolioError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("folio");

    let mut loader = AlbumLoader::new();
    let mut album_path = None;
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--lenient" => loader = loader.with_strict(false),
            "--quiet" => loader = loader.with_quiet(true),
            "--search" => match rest.next() {
                Some(dir) => loader = loader.with_search_path(dir),
                None => usage(program),
            },
            "--fonts" => {
                let registry = TypesetFontRegistry::new();
                println!(
                    "{}",
                    registry
                        .families()
                        .iter()
                        .map(|font| format!("{} ({})", font.name, font.key))
                        .join("\n")
                );
                return Ok(());
            }
            path if album_path.is_none() && !path.starts_with("--") => album_path = Some(path),
            _ => usage(program),
        }
    }
    let Some(album_path) = album_path else {
        usage(program)
    };

    let album = match loader.load_file(album_path) {
        Ok(album) => album,
        Err(FolioError::Invalid { file, errors }) => {
            for error in &errors {
                eprintln!("{}", error);
            }
            eprintln!("{} has {} error(s)", file, errors.len());
            process::exit(1);
        }
        Err(e) => return Err(e),
    };
    for diagnostic in &album.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let list = album.display_list()?;
    println!("{}", serde_json::to_string_pretty(&list)?);
    log::info!("{}: {} page(s)", album_path, list.page_count());
    Ok(())
}
