//! Built-in element animations exported from GIMP with the LED plug-in.
//!
//! Each table is stored in playback order.

mod dragon;
mod fire;
mod ice;
mod thunder;
mod water;

use crate::pattern::Pattern;

pub use dragon::DRAGON;
pub use fire::FIRE;
pub use ice::ICE;
pub use thunder::THUNDER;
pub use water::WATER;

/// LED count shared by every built-in pattern.
pub const LED_COUNT: usize = fire::LED_COUNT;

/// All built-in patterns, in the order a playlist cycles through them.
pub static ELEMENTS: [Pattern; 5] = [FIRE, ICE, WATER, THUNDER, DRAGON];

/// Look up a built-in pattern by name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<&'static Pattern> {
    ELEMENTS
        .iter()
        .find(|pattern| pattern.name().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_every_element_fits_the_strip() {
        for pattern in &ELEMENTS {
            assert_eq!(
                pattern.validate(LED_COUNT),
                Ok(()),
                "{} should be consistent",
                pattern.name()
            );
            assert_eq!(pattern.led_count(), LED_COUNT);
        }
    }

    #[test]
    fn test_shared_constants_agree() {
        assert_eq!(dragon::LED_COUNT, LED_COUNT);
        assert_eq!(ice::LED_COUNT, LED_COUNT);
        assert_eq!(thunder::LED_COUNT, LED_COUNT);
        assert_eq!(water::LED_COUNT, LED_COUNT);
    }

    #[test]
    fn test_elements_have_eight_frames_at_200ms() {
        for pattern in &ELEMENTS {
            assert_eq!(pattern.frame_count(), 8, "{}", pattern.name());
            assert_eq!(pattern.delay(), fire::DELAY, "{}", pattern.name());
        }
    }

    #[test]
    fn test_every_color_decodes_by_bit_position() {
        for pattern in &ELEMENTS {
            for frame in pattern.frames() {
                for (&packed, color) in frame.packed().iter().zip(frame.colors()) {
                    assert_eq!(u32::from(color.r), (packed >> 16) & 0xFF);
                    assert_eq!(u32::from(color.g), (packed >> 8) & 0xFF);
                    assert_eq!(u32::from(color.b), packed & 0xFF);
                }
            }
        }
    }

    #[test]
    fn test_fire_starts_full_red() {
        let first = FIRE.frames()[0];
        assert!(first.packed().iter().all(|&c| c == 0xFF0000));
    }

    #[test_case("fire" ; "lowercase")]
    #[test_case("FIRE" ; "uppercase")]
    #[test_case("Fire" ; "mixed case")]
    fn test_by_name_ignores_case(name: &str) {
        assert_eq!(by_name(name).map(Pattern::name), Some("fire"));
    }

    #[test]
    fn test_by_name_unknown() {
        assert!(by_name("earth").is_none());
    }
}
