use clap::Subcommand;
use studysprint_core::Theme;

use super::{open_store, print_outcome, CmdResult};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Select a theme (blue, purple, dark, sunset)
    Theme {
        /// Theme name
        name: String,
    },
    /// Toggle completion sound
    Sound,
    /// Toggle vibration
    Vibration,
    /// Print the colour palette of the current theme
    Palette,
    /// Print current settings
    Show,
}

pub fn run(action: SettingsAction) -> CmdResult {
    let mut store = open_store()?;

    match action {
        SettingsAction::Theme { name } => {
            let theme: Theme = name.parse()?;
            let event = store.set_theme(theme);
            print_outcome(&store, event)
        }
        SettingsAction::Sound => {
            let event = store.toggle_sound();
            print_outcome(&store, event)
        }
        SettingsAction::Vibration => {
            let event = store.toggle_vibration();
            print_outcome(&store, event)
        }
        SettingsAction::Palette => {
            println!("{}", serde_json::to_string_pretty(store.timer().palette())?);
            Ok(())
        }
        SettingsAction::Show => {
            let timer = store.timer();
            println!("theme:     {}", timer.theme());
            println!("sound:     {}", on_off(timer.sound_enabled()));
            println!("vibration: {}", on_off(timer.vibration_enabled()));
            Ok(())
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
