//! Firmware back end: WS2812 strip on RMT channel 0 / GPIO18, next-pattern
//! button on GPIO9 (wired to ground).

use std::sync::mpsc::{self, Sender};
use std::thread;

use embedded_hal::digital::InputPin;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::{PinDriver, Pull};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::sys::EspError;
use log::{error, info};
use ws2812_esp32_rmt_driver::{Ws2812Esp32Rmt, Ws2812Esp32RmtDriverError};

use crate::buffered::{BufferedStrip, StripError};
use crate::button::{Button, PressedTo};
use crate::config::Config;
use crate::patterns::LED_COUNT;
use crate::player::{PatternPlayer, PlayError};
use crate::playlist::{Playlist, PlaylistError};
use crate::stop::StopToken;

/// The strip as wired on the board.
pub type Esp32Strip<'d> = BufferedStrip<Ws2812Esp32Rmt<'d>, LED_COUNT>;

const BUTTON_STACK_SIZE: usize = 4096;

/// Error types for firmware operations.
#[derive(Debug, thiserror::Error)]
pub enum Esp32Error {
    #[error("ESP-IDF error: {0}")]
    Esp(#[from] EspError),
    #[error(transparent)]
    Play(#[from] PlayError<StripError<Ws2812Esp32RmtDriverError>>),
    #[error("WS2812 driver initialization failed: {0}")]
    DriverInit(#[from] Ws2812Esp32RmtDriverError),
    #[error(transparent)]
    Playlist(#[from] PlaylistError),
    #[error("failed to spawn button thread: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Initialise the peripherals and play the element playlist forever.
///
/// Each button press stops the running pattern and advances to the next.
pub fn run() -> Result<(), Esp32Error> {
    let config = Config::default();
    let peripherals = Peripherals::take()?;

    let driver = Ws2812Esp32Rmt::new(peripherals.rmt.channel0, peripherals.pins.gpio18)?;
    let strip: Esp32Strip<'_> = BufferedStrip::new(driver);

    let mut pin = PinDriver::input(peripherals.pins.gpio9)?;
    pin.set_pull(Pull::Up)?;
    let button = Button::new(pin, PressedTo::Ground);

    let stop = StopToken::new();
    let (presses, rx) = mpsc::channel();
    spawn_button_watcher(button, presses, stop.clone())?;

    let mut playlist = Playlist::elements();
    playlist.select(&config.start_pattern)?;
    let mut player = PatternPlayer::new(strip, FreeRtos);

    info!("Starting with '{}'", playlist.current().name());
    loop {
        player.play(playlist.current(), &stop)?;
        for () in rx.try_iter() {
            info!("Next pattern: '{}'", playlist.advance().name());
        }
    }
}

fn spawn_button_watcher<P>(
    mut button: Button<P>,
    presses: Sender<()>,
    stop: StopToken,
) -> Result<(), Esp32Error>
where
    P: InputPin + Send + 'static,
{
    thread::Builder::new()
        .stack_size(BUTTON_STACK_SIZE)
        .spawn(move || {
            loop {
                if let Err(e) = button.wait_for_press(&mut FreeRtos) {
                    error!("Button read failed: {e:?}");
                    return;
                }
                if presses.send(()).is_err() {
                    return;
                }
                stop.request_stop();
            }
        })
        .map_err(Esp32Error::Spawn)?;
    Ok(())
}
