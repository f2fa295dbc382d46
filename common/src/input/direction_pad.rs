use crate::games::snake::Direction;

/// Four circular hot zones laid over a camera or pointer frame. A fingertip
/// inside a zone steers the snake in that zone's direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionPad {
    zones: [(Direction, (i32, i32)); 4],
    radius: i32,
}

impl DirectionPad {
    pub fn new(frame_width: i32, frame_height: i32) -> Self {
        let w = frame_width as f64;
        let h = frame_height as f64;
        let radius = (frame_width.min(frame_height) as f64 * 0.10) as i32;
        let at = |fx: f64, fy: f64| ((w * fx) as i32, (h * fy) as i32);

        Self {
            zones: [
                (Direction::Up, at(0.50, 0.20)),
                (Direction::Down, at(0.50, 0.80)),
                (Direction::Left, at(0.20, 0.50)),
                (Direction::Right, at(0.80, 0.50)),
            ],
            radius,
        }
    }

    /// First zone containing the point, checked up, down, left, right.
    pub fn direction_at(&self, x: i32, y: i32) -> Option<Direction> {
        let r = i64::from(self.radius);
        self.zones.iter().find_map(|(direction, (cx, cy))| {
            let dx = i64::from(x - cx);
            let dy = i64::from(y - cy);
            (dx * dx + dy * dy <= r * r).then_some(*direction)
        })
    }
}

/// Centered button shown over the frame while the game is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestartButton {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RestartButton {
    pub fn new(frame_width: i32, frame_height: i32) -> Self {
        let button_width = (frame_width as f64 * 0.5) as i32;
        let button_height = (frame_height as f64 * 0.12) as i32;
        let x1 = (frame_width - button_width) / 2;
        let y1 = (frame_height - button_height) / 2;
        Self {
            x1,
            y1,
            x2: x1 + button_width,
            y2: y1 + button_height,
        }
    }

    /// Edges count as inside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x1..=self.x2).contains(&x) && (self.y1..=self.y2).contains(&y)
    }
}

/// Pointer geometry for one frame size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameLayout {
    pub pad: DirectionPad,
    pub restart_button: RestartButton,
}

impl FrameLayout {
    pub fn new(frame_width: i32, frame_height: i32) -> Self {
        Self {
            pad: DirectionPad::new(frame_width, frame_height),
            restart_button: RestartButton::new(frame_width, frame_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_geometry_for_640x480() {
        let pad = DirectionPad::new(640, 480);
        // Centers at (320, 96), (320, 384), (128, 240), (512, 240); radius 48.
        assert_eq!(pad.direction_at(320, 96 + 48), Some(Direction::Up));
        assert_eq!(pad.direction_at(320, 96 + 49), None);
        assert_eq!(pad.direction_at(320, 384 - 48), Some(Direction::Down));
        assert_eq!(pad.direction_at(320, 384 - 49), None);
        assert_eq!(pad.direction_at(128, 240 - 48), Some(Direction::Left));
        assert_eq!(pad.direction_at(128, 240 - 49), None);
        assert_eq!(pad.direction_at(512 + 48, 240), Some(Direction::Right));
        assert_eq!(pad.direction_at(512 + 49, 240), None);
    }

    #[test]
    fn test_direction_at_zone_centers_and_edges() {
        let pad = DirectionPad::new(640, 480);
        assert_eq!(pad.direction_at(320, 96), Some(Direction::Up));
        assert_eq!(pad.direction_at(320, 384 + 48), Some(Direction::Down));
        assert_eq!(pad.direction_at(128 - 48, 240), Some(Direction::Left));
        assert_eq!(pad.direction_at(512, 240), Some(Direction::Right));
        // Just outside the left zone on the diagonal.
        assert_eq!(pad.direction_at(128 + 34, 240 + 34), None);
    }

    #[test]
    fn test_center_of_frame_has_no_direction() {
        let pad = DirectionPad::new(640, 480);
        assert_eq!(pad.direction_at(320, 240), None);
    }

    #[test]
    fn test_restart_button_bounds() {
        let button = RestartButton::new(640, 480);
        assert_eq!(button, RestartButton { x1: 160, y1: 211, x2: 480, y2: 268 });
        assert!(button.contains(160, 211));
        assert!(button.contains(480, 268));
        assert!(button.contains(320, 240));
        assert!(!button.contains(159, 240));
        assert!(!button.contains(320, 269));
    }
}
