use log::info;
use macroquad::prelude::*;

const MAX_CMD_LEN: usize = 100;
const CMD_FONT_SIZE: f32 = 24.0;

#[derive(Debug, PartialEq, Eq)]
pub struct Command {
    pub command: String,
    pub args: Vec<String>,
}

/// A one-line prompt. It opens once `/` or `:` gets typed and
/// collects characters until the command is submitted or dropped.
pub struct CommandCenter {
    buff: String,
}

impl CommandCenter {
    pub fn new() -> Self {
        Self {
            buff: String::with_capacity(MAX_CMD_LEN),
        }
    }

    pub fn should_pause(&self) -> bool {
        !self.buff.is_empty()
    }

    pub fn reset(&mut self) {
        self.buff.clear();
    }

    pub fn input(&mut self, ch: char) {
        if ch.is_control() || self.buff.len() >= MAX_CMD_LEN {
            return;
        }

        if !self.buff.is_empty() {
            self.buff.push(ch);
            return;
        }

        if ch != '/' && ch != ':' {
            return;
        }

        self.buff.push(ch);
    }

    pub fn backspace(&mut self) {
        self.buff.pop();
    }

    /// Closes the prompt and returns the parsed command, if
    /// the prompt holds anything besides the prefix.
    pub fn submit(&mut self) -> Option<Command> {
        if self.buff.is_empty() {
            return None;
        }

        info!("> {}", &self.buff[1..]);
        let res = parse_command(&self.buff);
        self.reset();

        res
    }

    pub fn draw(&self) {
        if self.buff.is_empty() {
            return;
        }

        set_default_camera();
        let y = screen_height() - CMD_FONT_SIZE * 1.5;
        draw_rectangle(0.0, y, screen_width(), CMD_FONT_SIZE * 1.5, BLACK);
        draw_text(&self.buff, 4.0, y + CMD_FONT_SIZE, CMD_FONT_SIZE, WHITE);
    }
}

impl Default for CommandCenter {
    fn default() -> Self {
        CommandCenter::new()
    }
}

fn parse_command(s: &str) -> Option<Command> {
    let s = &s[1..];
    let mut parts = s.split_ascii_whitespace();
    let command = parts.next()?.to_string();

    Some(Command {
        command,
        args: parts.map(|x| x.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(cmd: &mut CommandCenter, s: &str) {
        s.chars().for_each(|ch| cmd.input(ch));
    }

    #[test]
    fn test_ignores_input_without_prefix() {
        let mut cmd = CommandCenter::new();
        type_str(&mut cmd, "win");

        assert!(!cmd.should_pause());
        assert_eq!(cmd.submit(), None);
    }

    #[test]
    fn test_submit_parses_args() {
        let mut cmd = CommandCenter::new();
        type_str(&mut cmd, ":cfg  paddle speed 9.5");

        assert!(cmd.should_pause());
        assert_eq!(
            cmd.submit(),
            Some(Command {
                command: "cfg".to_string(),
                args: vec!["paddle".to_string(), "speed".to_string(), "9.5".to_string()],
            })
        );
        assert!(!cmd.should_pause());
    }

    #[test]
    fn test_bare_prefix_submits_nothing() {
        let mut cmd = CommandCenter::new();
        type_str(&mut cmd, "/");

        assert_eq!(cmd.submit(), None);
        assert!(!cmd.should_pause());
    }

    #[test]
    fn test_backspace_closes_prompt() {
        let mut cmd = CommandCenter::new();
        type_str(&mut cmd, "/k");
        cmd.backspace();
        cmd.backspace();

        assert!(!cmd.should_pause());
    }

    #[test]
    fn test_control_chars_dropped() {
        let mut cmd = CommandCenter::new();
        type_str(&mut cmd, "/kill\r");

        assert_eq!(cmd.submit().map(|x| x.command), Some("kill".to_string()));
    }
}
