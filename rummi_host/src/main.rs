use std::io::{BufRead, Write};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rummi::{
    visualize_board, Cell, EffectPool, GameSession, Okay, Request, TileId, HAND_SIZE,
};
use tracing::{debug, info, trace};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Hosts a game session and speaks line-delimited JSON with a
/// presentation-layer process: one request per stdin line, one snapshot
/// per stdout line.
#[derive(Parser)]
struct Args {
    /// How many players to deal in
    #[arg(short, long, default_value_t = 2)]
    players: u8,

    /// Tiles dealt to each player at game start
    #[arg(long, default_value_t = HAND_SIZE)]
    hand_size: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut pool = EffectPool::new();
    let mut session = new_session(args.players, args.hand_size, &mut rng, &mut pool)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // The initial frame, so the presentation layer can draw the deal.
    write_line(&mut out, &session.snapshot())?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let request: Request = match serde_json::from_str(&line) {
            Ok(request) => request,
            Err(err) => {
                info!(%err, "Discarding malformed request");
                continue;
            }
        };
        trace!(request = %line);

        match request {
            Request::NewGame { players } => {
                // A deal that exceeds the pile is recoverable: keep the
                // current session instead of tearing down the host.
                match new_session(players, args.hand_size, &mut rng, &mut pool) {
                    Ok(fresh) => session = fresh,
                    Err(err) => info!("{:#}", err),
                }
            }
            Request::SelectTile { tile } => {
                match session.select_tile(TileId(tile)) {
                    Ok(targets) => debug!(tile, num_targets = targets.len()),
                    Err(err) => log_illegal_event(&err),
                }
            }
            Request::ChooseTarget { track, row, col } => match Cell::new(track, row, col) {
                Ok(cell) => {
                    if let Err(err) = session.choose_target(cell) {
                        log_illegal_event(&err);
                    } else {
                        session.refresh_validity();
                    }
                }
                Err(err) => info!("{}", err),
            },
            Request::Snapshot => {}
            Request::Bye => {
                write_line(&mut out, &Okay())?;
                break;
            }
        }

        debug!("\n{}", visualize_board(session.board()));
        write_line(&mut out, &session.snapshot())?;
    }

    // Stop the decorative wildcard tasks before final teardown.
    pool.shutdown();
    Ok(())
}

fn new_session(
    players: u8,
    hand_size: usize,
    rng: &mut StdRng,
    pool: &mut EffectPool,
) -> anyhow::Result<GameSession> {
    let names: Vec<String> = (1..=players).map(|n| format!("Player {}", n)).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let session = GameSession::with_hand_size(&name_refs, hand_size, rng)?;

    // A color-cycle task per dealt wildcard; undealt ones stay static
    // in the draw pile.
    for id in session.wildcard_ids() {
        if session.tile(id).is_some_and(|t| t.is_in_hand) {
            pool.spawn_cycle(id);
        }
    }
    Ok(session)
}

fn log_illegal_event(err: &rummi::IllegalEvent) {
    let mut err_dyn = err as &dyn std::error::Error;
    while let Some(src_err) = err_dyn.source() {
        info!("{}", err_dyn);
        err_dyn = src_err;
    }
    info!("{}", err_dyn);
}

fn write_line<T: serde::Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    let mut line = serde_json::to_string(value)?;
    line.push('\n');
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout carries the JSON protocol, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
