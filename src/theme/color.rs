//! Luminance based light/dark detection for CSS colours.

/// Colours with a luminance below this, on a 0-255 scale, count as dark.
const DARK_LUMINANCE_THRESHOLD: f64 = 128.0;

/// Whether `color` is perceptually dark.
///
/// Accepts `#rrggbb`, `#rgb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`. Anything
/// that cannot be parsed is treated as light.
pub fn is_color_dark(color: &str) -> bool {
    parse_rgb(color)
        .map(|(red, green, blue)| luminance(red, green, blue) < DARK_LUMINANCE_THRESHOLD)
        .unwrap_or(false)
}

fn luminance(red: f64, green: f64, blue: f64) -> f64 {
    0.2126 * red + 0.7152 * green + 0.0722 * blue
}

fn parse_rgb(color: &str) -> Option<(f64, f64, f64)> {
    let color = color.trim();

    if let Some(hex) = color.strip_prefix('#') {
        parse_hex(hex)
    } else if color.starts_with("rgb") {
        parse_rgb_function(color)
    } else {
        None
    }
}

fn parse_hex(hex: &str) -> Option<(f64, f64, f64)> {
    if !hex.is_ascii() {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok().map(f64::from);

    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            // #abc is shorthand for #aabbcc.
            let expand = |digit: &str| channel(&digit.repeat(2));
            Some((expand(&hex[0..1])?, expand(&hex[1..2])?, expand(&hex[2..3])?))
        }
        _ => None,
    }
}

fn parse_rgb_function(color: &str) -> Option<(f64, f64, f64)> {
    let start = color.find('(')?;
    let end = color.rfind(')')?;
    let arguments = color.get(start + 1..end)?;

    let mut channels = arguments
        .split(',')
        .map(|channel| channel.trim().parse::<f64>().ok());

    Some((channels.next()??, channels.next()??, channels.next()??))
}
