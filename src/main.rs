//! worddrill main entry point
//!
//! Drives a practice session over a CSV deck: prompt, read an answer,
//! check it, tally, and pronounce English words along the way.

use log::{error, info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use worddrill::answer::checker::check_with;
use worddrill::deck::{load_deck, Direction};
use worddrill::drafts::{DraftStore, FileDraftStore, MemoryDraftStore};
use worddrill::feedback::{FeedbackRegion, FeedbackResult, SurfaceMap};
use worddrill::speech::{Announcer, create_synth, AMERICAN_ENGLISH};
use worddrill::state::{Config, Session};
use worddrill::Result;

/// Id of the single terminal feedback region
const FEEDBACK_ID: &str = "feedback";

/// Feedback region that prints into the terminal
struct TerminalRegion;

impl FeedbackRegion for TerminalRegion {
    fn present(&mut self, result: &FeedbackResult) {
        for line in &result.lines {
            println!("{}", line);
        }
        println!();
    }
}

/// Parsed command line
struct Args {
    debug: bool,
    shuffle: bool,
    direction: Direction,
    deck_path: PathBuf,
}

fn usage() -> ! {
    eprintln!("Usage: worddrill [--debug] [--shuffle] [--direction en|ru|example] DECK.csv");
    process::exit(2);
}

fn parse_args() -> Args {
    let mut debug = false;
    let mut shuffle = false;
    let mut direction = Direction::EnToRus;
    let mut deck_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--debug" | "-d" => debug = true,
            "--shuffle" => shuffle = true,
            "--direction" => {
                direction = match args.next().as_deref() {
                    Some("en") => Direction::EnToRus,
                    Some("ru") => Direction::RusToEn,
                    Some("example") => Direction::Example,
                    _ => usage(),
                };
            }
            _ if arg.starts_with('-') => usage(),
            _ => deck_path = Some(PathBuf::from(arg)),
        }
    }

    match deck_path {
        Some(deck_path) => Args {
            debug,
            shuffle,
            direction,
            deck_path,
        },
        None => usage(),
    }
}

fn main() {
    let args = parse_args();

    // Initialize logger
    if args.debug {
        // Debug mode: write to worddrill.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("worddrill.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open worddrill.log for debug logging: {}", e);
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "worddrill version {} starting (debug mode, logging to worddrill.log)",
            worddrill::VERSION
        );
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    if let Err(e) = run(args) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    info!("Config loaded from {:?}", config.path());

    let mut deck = load_deck(&args.deck_path)?;
    if args.shuffle || config.shuffle() {
        deck.shuffle();
    }

    // Speech is optional: practice continues silently if no TTS backend
    // is available
    let mut announcer = if config.speech_enabled() {
        match create_synth() {
            Ok(synth) => {
                let mut preference = AMERICAN_ENGLISH.clone();
                preference.language = config.speech_language();
                Some(Announcer::new(synth, preference, config.rate_scale()))
            }
            Err(e) => {
                warn!("Speech unavailable, continuing without audio: {}", e);
                None
            }
        }
    } else {
        None
    };

    let mut drafts: Box<dyn DraftStore> = match FileDraftStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Draft file unavailable, drafts kept in memory only: {}", e);
            Box::new(MemoryDraftStore::new())
        }
    };

    let mut surfaces = SurfaceMap::new();
    surfaces.register(FEEDBACK_ID, Box::new(TerminalRegion));

    let evaluator = config.evaluator();
    let mut session = Session::new(deck, args.direction);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("worddrill {} - {} cards", worddrill::VERSION, session.position().1);
    println!("Finish a line with \\ to save it as a draft and move on.\n");

    while let Some(card) = session.current().cloned() {
        let (pos, total) = session.position();
        let draft_key = session.draft_key().unwrap_or_default();

        if let Some(text) = session.direction().spoken_text(&card) {
            if let Some(announcer) = announcer.as_mut() {
                if let Err(e) = announcer.announce(text) {
                    warn!("Announcement failed: {}", e);
                }
            }
        }

        let prompt = session.direction().prompt(&card);
        if card.transcription.is_empty() {
            println!("[{}/{}] {}", pos, total, prompt);
        } else {
            println!("[{}/{}] {} {}", pos, total, prompt, card.transcription);
        }
        if let Some(draft) = drafts.load(&draft_key) {
            println!("(draft: {})", draft);
        }
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                println!();
                break;
            }
        };

        // Trailing backslash parks the answer as a draft for later
        if let Some(unfinished) = line.strip_suffix('\\') {
            drafts.save(&draft_key, unfinished)?;
            println!("(saved as draft)\n");
            session.advance();
            continue;
        }

        let result = check_with(
            &evaluator,
            session.direction().match_mode(),
            &mut surfaces,
            drafts.as_mut(),
            FEEDBACK_ID,
            &draft_key,
            &line,
            session.direction().reference(&card),
        )?;

        if let Some(result) = result {
            session.record(&result);
        }
        session.advance();
    }

    println!("{}", session.summary());
    Ok(())
}
