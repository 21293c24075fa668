use owo_colors::OwoColorize;
use stickercube::{Color, CubeState};

/// Renders the unfolded net of the cube, optionally colored with ANSI escape
/// codes.
pub(crate) fn render(state: &CubeState, colored: bool) -> String {
    let plain = state.to_string();
    if !colored {
        return plain;
    }
    plain
        .chars()
        .map(|c| match Color::from_symbol(c) {
            Some(color) => paint(color, c),
            None => c.to_string(),
        })
        .collect()
}

fn paint(color: Color, symbol: char) -> String {
    match color {
        Color::White => symbol.white().to_string(),
        Color::Yellow => symbol.yellow().to_string(),
        Color::Green => symbol.green().to_string(),
        Color::Blue => symbol.blue().to_string(),
        Color::Orange => symbol.truecolor(255, 135, 0).to_string(),
        Color::Red => symbol.red().to_string(),
    }
}
