mod delay;
mod display;
mod recording;
mod script;
mod terminal;

pub use delay::StdDelay;
pub use display::{DisplayError, TerminalStrip};
pub use recording::{MockDelay, MockStrip, MockStripError, StripEvent, Timeline};
pub use script::{Command, ParseError};
pub use terminal::{TerminalError, run_interactive_terminal};
