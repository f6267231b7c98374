//! Ice element: 8 frames across 20 LEDs.

use core::time::Duration;

use crate::pattern::{Frame, Pattern};

pub(super) const DELAY: Duration = Duration::from_millis(200);
pub(super) const LED_COUNT: usize = 20;

/// The ice element pattern.
pub const ICE: Pattern = Pattern::new("ice", DELAY, &FRAMES);

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
    0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0,
    0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0, 0x00cee0,
];

#[rustfmt::skip]
const FRAME_1: [u32; LED_COUNT] = [
    0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7,
    0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7,
];

#[rustfmt::skip]
const FRAME_2: [u32; LED_COUNT] = [
    0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f,
    0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f,
];

#[rustfmt::skip]
const FRAME_3: [u32; LED_COUNT] = [
    0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237,
    0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237,
];

#[rustfmt::skip]
const FRAME_4: [u32; LED_COUNT] = [
    0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21,
    0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21, 0x001e21,
];

#[rustfmt::skip]
const FRAME_5: [u32; LED_COUNT] = [
    0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237,
    0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237, 0x003237,
];

#[rustfmt::skip]
const FRAME_6: [u32; LED_COUNT] = [
    0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f,
    0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f, 0x00666f,
];

#[rustfmt::skip]
const FRAME_7: [u32; LED_COUNT] = [
    0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7,
    0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7, 0x009aa7,
];
