//! Water element: 8 frames across 20 LEDs.

use core::time::Duration;

use crate::pattern::{Frame, Pattern};

pub(super) const DELAY: Duration = Duration::from_millis(200);
pub(super) const LED_COUNT: usize = 20;

/// The water element pattern.
pub const WATER: Pattern = Pattern::new("water", DELAY, &FRAMES);

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
    0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb,
    0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb, 0x006cfb,
];

#[rustfmt::skip]
const FRAME_1: [u32; LED_COUNT] = [
    0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc,
    0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc,
];

#[rustfmt::skip]
const FRAME_2: [u32; LED_COUNT] = [
    0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d,
    0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d,
];

#[rustfmt::skip]
const FRAME_3: [u32; LED_COUNT] = [
    0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e,
    0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e,
];

#[rustfmt::skip]
const FRAME_4: [u32; LED_COUNT] = [
    0x001025, 0x001025, 0x001025, 0x001025, 0x001025, 0x001025, 0x001025, 0x001025, 0x001025, 0x001025,
    0x001025, 0x001025, 0x001025, 0x001025, 0x001025, 0x001025, 0x001025, 0x001025, 0x001025, 0x001025,
];

#[rustfmt::skip]
const FRAME_5: [u32; LED_COUNT] = [
    0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e,
    0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e, 0x001a3e,
];

#[rustfmt::skip]
const FRAME_6: [u32; LED_COUNT] = [
    0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d,
    0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d, 0x00357d,
];

#[rustfmt::skip]
const FRAME_7: [u32; LED_COUNT] = [
    0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc,
    0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc, 0x0050bc,
];
