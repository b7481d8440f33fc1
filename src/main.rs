use clap::{Parser, Subcommand};
use showdeck::{config, generate, output, paths, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "showdeck")]
#[command(about = "Static slideshow generator for photo/video galleries")]
#[command(long_about = "\
Static slideshow generator for photo/video galleries

Your filesystem is the data source. Each immediate subdirectory of photos/
becomes a section of the generated page, and its media plays as a slideshow
with manual controls and automatic advance.

Content structure:

  ./
  ├── config.toml              # Site config (optional)
  ├── index.html               # Generated output
  └── photos/
      ├── flag/                # Section \"Flag\"
      │   ├── 1.jpg
      │   └── 2.jpg
      ├── champions/           # Section \"Champions\"
      │   ├── clip.mp4         # Video entry
      │   ├── clip.jpg         # Poster for clip.mp4 (and an image entry)
      │   ├── description.txt  # Section description (description.md wins)
      │   └── links.txt        # External embeds, one URL per line
      └── 10_finale/           # Natural order: 2_x sorts before 10_y

Media classification (by extension, case-insensitive):
  Images: jpg jpeg png webp gif
  Videos: mp4 m4v mov webm
  links.txt: YouTube/Vimeo URLs become embedded players

Run 'showdeck gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Project root: photos/ is read here, index.html is written here
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan photos/ and write index.html (the default when omitted)
    Build,
    /// Scan and print the inventory without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => build(&cli.root),
        Command::Check => check(&cli.root),
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(())
        }
    }
}

/// The full pipeline: resolve paths, load config, scan, emit.
fn build(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let paths = paths::ProjectPaths::resolve(root)?;
    let site_config = config::load_config(&paths.root)?;

    // One clock read feeds both the cache token and the header timestamp.
    let now = chrono::Local::now();
    let version = now.format("%Y-%m-%d").to_string();
    let generated_at = now.format("%Y-%m-%d %H:%M:%S").to_string();

    let manifest = scan::scan(&paths.photos_dir, &version)?;
    output::print_warnings(&manifest);

    generate::generate(&manifest, &site_config, &paths.output_file, &generated_at)?;
    output::print_generate_output(&manifest, &paths.output_file);

    Ok(())
}

/// Scan and report without writing the output file.
fn check(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let paths = paths::ProjectPaths::resolve(root)?;
    config::load_config(&paths.root)?;

    let version = chrono::Local::now().format("%Y-%m-%d").to_string();
    let manifest = scan::scan(&paths.photos_dir, &version)?;

    output::print_inventory(&manifest);
    output::print_warnings(&manifest);

    Ok(())
}
