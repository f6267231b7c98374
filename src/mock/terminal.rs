use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, warn};
use thiserror::Error;

use super::display::DisplayError;
use super::{Command, StdDelay, TerminalStrip};
use crate::config::Config;
use crate::player::{PatternPlayer, PlayError};
use crate::playlist::{Playlist, PlaylistError};
use crate::stop::StopToken;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error(transparent)]
    Play(#[from] PlayError<DisplayError>),
    #[error(transparent)]
    Playlist(#[from] PlaylistError),
    #[error("failed to spawn input thread: {0}")]
    Spawn(#[source] io::Error),
}

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs the element playlist on a simulated strip in the terminal.
///
/// The current pattern repeats until a command arrives on stdin; every
/// command stops the running pattern at its next pixel.
pub fn run_interactive_terminal(config: &Config) -> Result<(), TerminalError> {
    let mut playlist = Playlist::elements();
    playlist.select(&config.start_pattern)?;

    let stop = StopToken::new();
    let (tx, rx) = mpsc::channel();
    spawn_input_reader(tx, stop.clone())?;

    let mut player = PatternPlayer::new(TerminalStrip::new(config.led_count), StdDelay);

    clear_screen();
    draw_help();
    announce(playlist.current().name());

    loop {
        player.play(playlist.current(), &stop)?;

        if apply_commands(&rx, &mut playlist) {
            player.blank().map_err(PlayError::Strip)?;
            println!();
            return Ok(());
        }
    }
}

/// Forward stdin commands to the player, requesting a stop for each one.
///
/// End of input counts as [`Command::Quit`].
fn spawn_input_reader(tx: Sender<Command>, stop: StopToken) -> Result<(), TerminalError> {
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();
            loop {
                let command = match lines.next() {
                    Some(Ok(line)) => match Command::parse(&line) {
                        Ok(command) => command,
                        Err(e) => {
                            eprintln!("\n{e}");
                            continue;
                        }
                    },
                    Some(Err(e)) => {
                        eprintln!("\nFailed to read input: {e}");
                        Command::Quit
                    }
                    None => Command::Quit,
                };

                let quit = command == Command::Quit;
                // Queue before stopping so the player sees the command once it returns.
                if tx.send(command).is_err() {
                    break;
                }
                stop.request_stop();
                if quit {
                    break;
                }
            }
        })
        .map_err(TerminalError::Spawn)?;
    Ok(())
}

/// Drain pending commands into the playlist. Returns `true` on quit.
fn apply_commands(rx: &Receiver<Command>, playlist: &mut Playlist) -> bool {
    for command in rx.try_iter() {
        debug!("Command: {command:?}");
        match command {
            Command::Next => announce(playlist.advance().name()),
            Command::Select(name) => match playlist.select(&name) {
                Ok(pattern) => announce(pattern.name()),
                Err(e) => warn!("{e}"),
            },
            Command::Quit => return true,
        }
    }
    false
}

fn draw_help() {
    println!("💡 Element Pattern Player");
    println!();
    println!("Commands: n (next) | s <pattern> | q (quit)");
    println!();
}

fn announce(name: &str) {
    println!();
    println!("▶ {name}");
    if let Err(e) = io::stdout().flush() {
        warn!("Failed to flush stdout: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_next_advances() {
        let (tx, rx) = mpsc::channel();
        let mut playlist = Playlist::elements();
        tx.send(Command::Next).unwrap();
        tx.send(Command::Next).unwrap();

        assert!(!apply_commands(&rx, &mut playlist));
        assert_eq!(playlist.current().name(), "water");
    }

    #[test]
    fn test_apply_select_unknown_keeps_pattern() {
        let (tx, rx) = mpsc::channel();
        let mut playlist = Playlist::elements();
        tx.send(Command::Select("earth".to_string())).unwrap();

        assert!(!apply_commands(&rx, &mut playlist));
        assert_eq!(playlist.current().name(), "fire");
    }

    #[test]
    fn test_apply_quit_stops_draining() {
        let (tx, rx) = mpsc::channel();
        let mut playlist = Playlist::elements();
        tx.send(Command::Quit).unwrap();
        tx.send(Command::Next).unwrap();

        assert!(apply_commands(&rx, &mut playlist));
        assert_eq!(playlist.current().name(), "fire");
    }
}
