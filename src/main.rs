mod app;
mod animation;
mod i18n;
mod input;
mod placement;
mod render;
mod state;

use clap::Parser;

use app::{App, AppConfig};
use i18n::Locale;

/// Smitten: a valentine card for the terminal
///
/// Asks the big question with two buttons. YES sits still and glows;
/// No runs away every time the pointer gets close, while the card
/// pleads a little harder with every failed attempt. Answer with the
/// mouse, quit with q.
#[derive(Parser, Debug)]
#[command(name = "smitten")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name shown on the card
    #[arg(short, long, env = "SMITTEN_NAME", default_value = "Valentine")]
    name: String,

    /// Locale key for the card copy
    #[arg(long, env = "SMITTEN_LOCALE", default_value = "en")]
    locale: String,

    /// Seed for the dodge randomness (useful for demos and recordings)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Disable the floating hearts backdrop
    #[arg(long)]
    no_hearts: bool,

    /// Disable the pointer sparkle trail
    #[arg(long)]
    no_sparkles: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig {
        name: cli.name,
        locale: Locale::from_key(&cli.locale),
        seed: cli.seed,
        show_hearts: !cli.no_hearts,
        show_sparkles: !cli.no_sparkles,
    };

    let mut app = App::new(config);

    // Run the app
    if let Err(e) = app.run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
