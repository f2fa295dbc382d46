use crate::games::snake::Direction;

/// Raw input from a provider, before the adapter resolves pointers through the
/// frame layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Direction(Direction),
    /// Fingertip or cursor position on the input frame.
    Pointer { x: i32, y: i32 },
    Click { x: i32, y: i32 },
    Restart,
    Quit,
}

/// Parses one line of a text provider. Unknown or malformed lines yield `None`.
///
/// Accepted forms: `w`/`a`/`s`/`d`, `up`/`down`/`left`/`right`, `r`/`restart`,
/// `q`/`quit`, `p X Y` (pointer) and `c X Y` (click).
pub fn parse_line(line: &str) -> Option<InputEvent> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?.to_ascii_lowercase();

    let event = match keyword.as_str() {
        "w" | "up" => InputEvent::Direction(Direction::Up),
        "s" | "down" => InputEvent::Direction(Direction::Down),
        "a" | "left" => InputEvent::Direction(Direction::Left),
        "d" | "right" => InputEvent::Direction(Direction::Right),
        "r" | "restart" => InputEvent::Restart,
        "q" | "quit" => InputEvent::Quit,
        "p" | "pointer" => {
            let (x, y) = parse_point(&mut parts)?;
            InputEvent::Pointer { x, y }
        }
        "c" | "click" => {
            let (x, y) = parse_point(&mut parts)?;
            InputEvent::Click { x, y }
        }
        _ => return None,
    };

    if parts.next().is_some() {
        return None;
    }
    Some(event)
}

fn parse_point<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Option<(i32, i32)> {
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    Some((x, y))
}
