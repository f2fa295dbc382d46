use crate::games::snake::GameSettings;

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            game_width: 700,
            game_height: 700,
            space_size: 25,
            speed_ms: 200,
            body_parts: 3,
            snake_color: "#00FF00".to_string(),
            food_color: "#FF0000".to_string(),
            background_color: "#000000".to_string(),
        }
    }
}
