use crate::core::data::colour::Colour;

/// Standard piecewise HSL -> RGB. `hue` in degrees, `saturation` and
/// `lightness` as fractions in `[0, 1]`. Channels are floored, not rounded.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    let a = saturation * lightness.min(1.0 - lightness);
    let channel = |n: f64| -> u8 {
        let k = (n + hue / 30.0) % 12.0;
        let value = lightness - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);

        (255.0 * value).floor() as u8
    };

    Colour {
        r: channel(0.0),
        g: channel(8.0),
        b: channel(4.0),
    }
}
