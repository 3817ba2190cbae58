use anyhow::Result;
use clap::Parser;
use medianame::{classify, extract_from_filename, generate_variants, strip_technical_terms, Scorer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Inspect how a filename is classified, cleaned and titled.
#[derive(Parser)]
#[command(name = "medianame", version)]
struct Cli {
    /// Filename to analyze (without path)
    filename: String,

    /// MIME type reported for the file
    #[arg(long, default_value = "application/octet-stream")]
    mime: String,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medianame=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let category = classify(&cli.filename, &cli.mime);
    let cleaned = strip_technical_terms(&cli.filename);
    let scorer = Scorer::with_default_dictionary();
    let title = scorer.derive_title(&cli.filename);
    let pair = extract_from_filename(&cli.filename);
    let variants = generate_variants(&title);

    if cli.json {
        let output = serde_json::json!({
            "filename": cli.filename,
            "category": category,
            "cleaned": cleaned,
            "title": title,
            "artist": pair.artist,
            "track_title": pair.title,
            "variants": variants,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("category:  {category}");
        println!("cleaned:   {cleaned}");
        println!("title:     {title}");
        if let Some(artist) = &pair.artist {
            println!("artist:    {artist}");
        }
        println!("track:     {}", pair.title);
        println!("variants:");
        for variant in &variants {
            println!("  - {variant}");
        }
    }

    Ok(())
}
