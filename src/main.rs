use std::io;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use sssnake::audio::{Audio, Bell, Silent, SoundCue};
use sssnake::config::GameConfig;
use sssnake::game::{self, Game, GameOverSummary};
use sssnake::input::{poll_input, GameInput};
use sssnake::renderer::{self, ViewState};

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid Snake in the terminal")]
struct Cli {
    /// Seed the apple placement for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the terminal-bell sound cues.
    #[arg(long)]
    mute: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    let result = run(&cli);
    cleanup_terminal()?;
    result
}

fn run(cli: &Cli) -> io::Result<()> {
    let mut terminal = setup_terminal()?;

    let config = GameConfig::classic();
    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(config, seed),
        None => Game::new(config),
    };

    let mut audio: Box<dyn Audio> = if cli.mute {
        Box::new(Silent)
    } else {
        Box::new(Bell)
    };
    audio.resume_music();

    let mut paused = false;
    let mut game_over: Option<GameOverSummary> = None;

    loop {
        let view = ViewState {
            paused,
            game_over,
            now: Instant::now(),
        };
        terminal.draw(|frame| renderer::render(frame, &game, &view))?;

        // Drain everything the player typed during the last sleep.
        while let Some(event) = poll_input(Duration::ZERO)? {
            match event {
                GameInput::Quit => return Ok(()),
                GameInput::Confirm => {
                    paused = false;
                    game_over = None;
                    audio.resume_music();
                }
                GameInput::PauseToggle => {
                    if paused {
                        paused = false;
                        audio.resume_music();
                    } else {
                        paused = true;
                        audio.pause_music();
                    }
                }
                GameInput::Steer(heading) => {
                    if !paused {
                        game.snake.set_heading(heading);
                    }
                }
            }
        }

        if !paused {
            match game.play(Instant::now()) {
                Ok(events) => {
                    if events.ate_apple {
                        audio.play_cue(SoundCue::Ding);
                    }
                    if events.broke_record {
                        audio.play_cue(SoundCue::BonusPoints);
                    }
                }
                Err(_collision) => {
                    // Wall or self, it ends the same way: show the score
                    // screen, reset, and wait for Enter.
                    audio.pause_music();
                    audio.play_cue(SoundCue::Bounce);

                    let summary = game.summary();
                    if summary.broke_record {
                        audio.play_cue(SoundCue::GoodResult);
                    }

                    game_over = Some(summary);
                    paused = true;
                    game.reset();
                }
            }
        }

        thread::sleep(game::tick_delay(game.snake.len(), game.config()));
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
