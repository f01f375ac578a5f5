use winit::event::{ElementState, KeyboardInput, VirtualKeyCode};

/// Collects typed text into a command line.
pub struct InputHandler {
    command_buffer: String,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            command_buffer: String::new(),
        }
    }

    pub fn handle_keyboard_input(&mut self, input: &KeyboardInput) -> InputAction {
        match (input.state, input.virtual_keycode) {
            (ElementState::Pressed, Some(key_code)) => self.handle_key_press(key_code),
            _ => InputAction::None,
        }
    }

    pub fn handle_key_press(&mut self, key_code: VirtualKeyCode) -> InputAction {
        match key_code {
            VirtualKeyCode::Up => InputAction::HistoryPrevious,
            VirtualKeyCode::Down => InputAction::HistoryNext,

            VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => {
                if self.command_buffer.trim().is_empty() {
                    InputAction::None
                } else {
                    InputAction::ExecuteCommand(std::mem::take(&mut self.command_buffer))
                }
            }

            VirtualKeyCode::Back => {
                self.command_buffer.pop();
                InputAction::UpdateCommandBuffer(self.command_buffer.clone())
            }

            VirtualKeyCode::Escape => {
                self.command_buffer.clear();
                InputAction::UpdateCommandBuffer(self.command_buffer.clone())
            }

            _ => InputAction::None,
        }
    }

    /// Printable text from `ReceivedCharacter`.
    pub fn handle_character(&mut self, character: char) -> InputAction {
        if character.is_control() {
            return InputAction::None;
        }
        self.command_buffer.push(character);
        InputAction::UpdateCommandBufferAndResetHistory(self.command_buffer.clone())
    }

    pub fn command_buffer(&self) -> &str {
        &self.command_buffer
    }

    pub fn set_command_buffer(&mut self, buffer: String) {
        self.command_buffer = buffer;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    None,
    ExecuteCommand(String),
    UpdateCommandBuffer(String),
    UpdateCommandBufferAndResetHistory(String),
    HistoryPrevious,
    HistoryNext,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(input: &mut InputHandler, text: &str) {
        for character in text.chars() {
            input.handle_character(character);
        }
    }

    #[test]
    fn enter_submits_and_clears_buffer() {
        let mut input = InputHandler::new();
        type_text(&mut input, "grid 3 3");
        assert_eq!(
            input.handle_key_press(VirtualKeyCode::Return),
            InputAction::ExecuteCommand("grid 3 3".to_string())
        );
        assert_eq!(input.command_buffer(), "");
        assert_eq!(input.handle_key_press(VirtualKeyCode::Return), InputAction::None);
    }

    #[test]
    fn editing_keys_update_buffer() {
        let mut input = InputHandler::new();
        type_text(&mut input, "paintx");
        assert_eq!(
            input.handle_key_press(VirtualKeyCode::Back),
            InputAction::UpdateCommandBuffer("paint".to_string())
        );
        assert_eq!(
            input.handle_key_press(VirtualKeyCode::Escape),
            InputAction::UpdateCommandBuffer(String::new())
        );
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut input = InputHandler::new();
        assert_eq!(input.handle_character('\r'), InputAction::None);
        assert_eq!(input.handle_character('\u{8}'), InputAction::None);
        assert_eq!(
            input.handle_character('#'),
            InputAction::UpdateCommandBufferAndResetHistory("#".to_string())
        );
    }
}
