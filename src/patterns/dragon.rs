//! Dragon element: 8 frames across 20 LEDs.

use core::time::Duration;

use crate::pattern::{Frame, Pattern};

pub(super) const DELAY: Duration = Duration::from_millis(200);
pub(super) const LED_COUNT: usize = 20;

/// The dragon element pattern.
pub const DRAGON: Pattern = Pattern::new("dragon", DELAY, &FRAMES);

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
    0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8,
    0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8, 0xec13f8,
];

#[rustfmt::skip]
const FRAME_1: [u32; LED_COUNT] = [
    0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9,
    0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9,
];

#[rustfmt::skip]
const FRAME_2: [u32; LED_COUNT] = [
    0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b,
    0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b,
];

#[rustfmt::skip]
const FRAME_3: [u32; LED_COUNT] = [
    0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d,
    0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d,
];

#[rustfmt::skip]
const FRAME_4: [u32; LED_COUNT] = [
    0x230224, 0x230224, 0x230224, 0x230224, 0x230224, 0x230224, 0x230224, 0x230224, 0x230224, 0x230224,
    0x230224, 0x230224, 0x230224, 0x230224, 0x230224, 0x230224, 0x230224, 0x230224, 0x230224, 0x230224,
];

#[rustfmt::skip]
const FRAME_5: [u32; LED_COUNT] = [
    0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d,
    0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d, 0x3a043d,
];

#[rustfmt::skip]
const FRAME_6: [u32; LED_COUNT] = [
    0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b,
    0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b, 0x75097b,
];

#[rustfmt::skip]
const FRAME_7: [u32; LED_COUNT] = [
    0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9,
    0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9, 0xb00eb9,
];
