use hashbrown::HashMap;
use log::{error, info};
use macroquad::prelude::*;
use quad_dbg::{Command, CommandCenter, ScreenCons, ScreenDump};

use crate::DebugCommand;

struct CommandEntry<G> {
    description: &'static str,
    payload: fn(&mut G, &[&str]) -> anyhow::Result<()>,
}

/// Console prompt plus the command registry of the game.
pub(crate) struct DebugStuff<G> {
    cmd_center: CommandCenter,
    cmds: HashMap<&'static str, CommandEntry<G>>,
}

impl<G> DebugStuff<G> {
    pub(crate) fn new(cmds: impl IntoIterator<Item = DebugCommand<G>>) -> Self {
        let mut res = Self {
            cmd_center: CommandCenter::new(),
            cmds: HashMap::new(),
        };

        for (name, description, payload) in cmds {
            res.add_command(name, description, payload);
        }

        res
    }

    fn add_command(
        &mut self,
        name: &'static str,
        description: &'static str,
        payload: fn(&mut G, &[&str]) -> anyhow::Result<()>,
    ) {
        if name == "help" {
            error!("{name:?} is a builtin command");
            return;
        }

        let old = self.cmds.insert(
            name,
            CommandEntry {
                description,
                payload,
            },
        );
        if old.is_some() {
            error!("Command {name:?} registered twice");
        }
    }

    pub(crate) fn should_pause(&self) -> bool {
        self.cmd_center.should_pause()
    }

    pub(crate) fn input(&mut self, game: &mut G) {
        while let Some(ch) = get_char_pressed() {
            self.cmd_center.input(ch);
        }

        if !self.cmd_center.should_pause() {
            return;
        }

        if is_key_pressed(KeyCode::Escape) {
            self.cmd_center.reset();
            return;
        }

        if is_key_pressed(KeyCode::Backspace) {
            self.cmd_center.backspace();
        }

        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            if let Some(cmd) = self.cmd_center.submit() {
                self.run_command(game, &cmd);
            }
        }
    }

    pub(crate) fn run_command(&self, game: &mut G, cmd: &Command) {
        if cmd.command == "help" {
            self.help();
            return;
        }

        let Some(entry) = self.cmds.get(cmd.command.as_str()) else {
            error!("Unknown command: {:?}", cmd.command);
            return;
        };

        let args = cmd.args.iter().map(String::as_str).collect::<Vec<_>>();
        if let Err(e) = (entry.payload)(game, &args) {
            error!("{}: {e:#}", cmd.command);
        }
    }

    fn help(&self) {
        let mut names = self.cmds.keys().copied().collect::<Vec<_>>();
        names.sort_unstable();

        info!("help: list all commands");
        for name in names {
            info!("{name}: {}", self.cmds[name].description);
        }
    }

    pub(crate) fn draw(&self, show_overlay: bool) {
        ScreenCons::draw(show_overlay);
        if show_overlay {
            ScreenDump::draw();
        }
        self.cmd_center.draw();
    }
}
