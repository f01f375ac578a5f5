use std::collections::VecDeque;

pub struct Console {
    lines: VecDeque<String>,
    max_lines: usize,
    current_command: String,
    prompt: String,
    history: Vec<String>,
    history_index: Option<usize>,
}

impl Console {
    pub fn new(max_lines: usize) -> Self {
        let mut console = Self {
            lines: VecDeque::new(),
            max_lines,
            current_command: String::new(),
            prompt: "pixelgrid> ".to_string(),
            history: Vec::new(),
            history_index: None,
        };

        console.add_line("Pixel Grid".to_string());
        console.add_line("Type 'grid 16 16' and press ENTER, then drag to paint".to_string());
        console.add_line("Type 'help' for all commands".to_string());

        console
    }

    pub fn add_line(&mut self, line: String) {
        self.lines.push_back(line);
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
    }

    pub fn add_output(&mut self, output: &str) {
        for line in output.lines() {
            self.add_line(line.to_string());
        }
    }

    pub fn add_error(&mut self, error: &str) {
        self.add_line(format!("Error: {}", error));
    }

    pub fn set_current_command(&mut self, command: String) {
        self.current_command = command;
    }

    pub fn current_command(&self) -> &str {
        &self.current_command
    }

    /// Echoes a submitted command and records it in the history.
    pub fn execute_command(&mut self, command: String) -> String {
        self.add_line(format!("{}{}", self.prompt, command));
        self.current_command.clear();
        self.history_index = None;
        if self.history.last() != Some(&command) {
            self.history.push(command.clone());
        }
        command
    }

    pub fn history_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            Some(0) => 0,
            Some(i) => i - 1,
            None => self.history.len() - 1,
        };
        self.history_index = Some(index);
        self.current_command = self.history[index].clone();
    }

    pub fn history_next(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                self.history_index = Some(i + 1);
                self.current_command = self.history[i + 1].clone();
            }
            Some(_) => {
                self.history_index = None;
                self.current_command.clear();
            }
            None => {}
        }
    }

    pub fn reset_history_navigation(&mut self) {
        self.history_index = None;
    }

    /// The last `max_display_lines` lines, ending with the prompt line.
    pub fn display_lines(&self, max_display_lines: usize) -> Vec<String> {
        let mut all_lines: Vec<String> = self.lines.iter().cloned().collect();
        all_lines.push(format!("{}{}", self.prompt, self.current_command));

        let start_index = all_lines.len().saturating_sub(max_display_lines);
        all_lines.split_off(start_index)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(100)
    }
}
