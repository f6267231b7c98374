//! Fire element: 8 frames across 20 LEDs.

use core::time::Duration;

use crate::pattern::{Frame, Pattern};

pub(super) const DELAY: Duration = Duration::from_millis(200);
pub(super) const LED_COUNT: usize = 20;

/// The fire element pattern.
pub const FIRE: Pattern = Pattern::new("fire", DELAY, &FRAMES);

const FRAMES: [Frame; 8] = [
    Frame::new(&FRAME_0),
    Frame::new(&FRAME_1),
    Frame::new(&FRAME_2),
    Frame::new(&FRAME_3),
    Frame::new(&FRAME_4),
    Frame::new(&FRAME_5),
    Frame::new(&FRAME_6),
    Frame::new(&FRAME_7),
];

#[rustfmt::skip]
const FRAME_0: [u32; LED_COUNT] = [
    0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000,
    0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000, 0xff0000,
];

#[rustfmt::skip]
const FRAME_1: [u32; LED_COUNT] = [
    0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000,
    0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000,
];

#[rustfmt::skip]
const FRAME_2: [u32; LED_COUNT] = [
    0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000,
    0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000,
];

#[rustfmt::skip]
const FRAME_3: [u32; LED_COUNT] = [
    0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000,
    0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000,
];

#[rustfmt::skip]
const FRAME_4: [u32; LED_COUNT] = [
    0x260000, 0x260000, 0x260000, 0x260000, 0x260000, 0x260000, 0x260000, 0x260000, 0x260000, 0x260000,
    0x260000, 0x260000, 0x260000, 0x260000, 0x260000, 0x260000, 0x260000, 0x260000, 0x260000, 0x260000,
];

#[rustfmt::skip]
const FRAME_5: [u32; LED_COUNT] = [
    0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000,
    0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000, 0x3f0000,
];

#[rustfmt::skip]
const FRAME_6: [u32; LED_COUNT] = [
    0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000,
    0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000, 0x7f0000,
];

#[rustfmt::skip]
const FRAME_7: [u32; LED_COUNT] = [
    0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000,
    0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000, 0xbf0000,
];
