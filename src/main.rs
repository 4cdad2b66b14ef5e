use anyhow::{Context, Result};
use clap::Parser;
use setlist::model::{Genre, ScanOrder, Song};
use setlist::{BoundedStack, FilterMode, Playlist, PlaylistConfig};

#[derive(Parser, Debug)]
#[command(name = "setlist")]
#[command(about = "Build a playlist, filter and order it, then play it through", long_about = None)]
struct Args {
    /// Song as "name;artist;GENRE;seconds" (can be specified multiple times)
    #[arg(short = 's', long = "song", required = true)]
    songs: Vec<String>,

    /// Scan order: adding, name or duration
    #[arg(short = 'o', long, default_value = "adding")]
    order: ScanOrder,

    /// Keep only songs by this artist
    #[arg(long)]
    artist: Option<String>,

    /// Keep only songs of this genre
    #[arg(long)]
    genre: Option<Genre>,

    /// Keep only songs no longer than this many seconds
    #[arg(long)]
    max_duration: Option<u32>,

    /// Spend each filter exclusion after one traversal
    #[arg(long)]
    legacy_filters: bool,

    /// Number of traversals to print
    #[arg(long, default_value = "1")]
    passes: usize,

    /// Remember this many of the most recently played songs
    #[arg(long, default_value = "5")]
    history: usize,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let filter_mode = if args.legacy_filters {
        FilterMode::Consuming
    } else {
        FilterMode::Persistent
    };
    let config = PlaylistConfig::new().with_filter_mode(filter_mode);
    let mut playlist = Playlist::with_config(config);

    for spec in &args.songs {
        let song: Song = spec
            .parse()
            .with_context(|| format!("Failed to parse song {:?}", spec))?;
        playlist
            .add_song(song)
            .with_context(|| format!("Failed to add song {:?}", spec))?;
    }
    log::info!("Playlist loaded: {} songs", playlist.len());

    playlist.set_scanning_order(args.order);

    if args.artist.is_some() {
        playlist.filter_artist(args.artist.as_deref());
    }
    if args.genre.is_some() {
        playlist.filter_genre(args.genre);
    }
    if let Some(max) = args.max_duration {
        playlist.filter_duration(max);
    }
    log::info!(
        "Filters: {:?}, {} song(s) hidden ({:?} mode)",
        playlist.active_filters(),
        playlist.excluded_count(),
        filter_mode
    );

    let mut history = BoundedStack::new(args.history);
    for pass in 1..=args.passes {
        println!("Pass {}:", pass);
        let mut played = 0;
        for song in playlist.traverse() {
            println!("  {}", song);
            if let Some(evicted) = history.push_evicting(song.clone()) {
                log::debug!("history full, forgetting: {}", evicted);
            }
            played += 1;
        }
        if played == 0 {
            println!("  (nothing to play)");
        }
    }

    println!("Recently played:");
    for song in history.iter() {
        println!("  {}", song);
    }

    Ok(())
}
