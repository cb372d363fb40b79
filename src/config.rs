use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

use crate::layout::HitPolicy;
use crate::store::{KeyScope, PointerMode, StorePolicy};
use crate::window::PanelSize;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "browser-desk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal desktop of simulated browser windows"
)]
pub struct Cli {
    /// Windows to open at startup.
    #[arg(short = 'w', long = "windows", value_name = "COUNT", default_value_t = 0)]
    pub windows: usize,

    /// Offset, in cells on both axes, between consecutively created windows.
    #[arg(long = "cascade-step", value_name = "CELLS", default_value_t = 20)]
    pub cascade_step: i32,

    /// How pointer motion over a window affects its placement.
    #[arg(long = "pointer-mode", value_enum, default_value_t = PointerMode::Follow)]
    pub pointer_mode: PointerMode,

    /// Which windows record key presses.
    #[arg(long = "key-scope", value_enum, default_value_t = KeyScope::Shared)]
    pub key_scope: KeyScope,

    /// Which of several overlapping windows receives pointer events.
    #[arg(long = "hit-policy", value_enum, default_value_t = HitPolicy::FirstRegistered)]
    pub hit_policy: HitPolicy,

    #[arg(long = "panel-width", value_name = "CELLS", default_value_t = 60)]
    pub panel_width: u16,

    #[arg(long = "panel-height", value_name = "CELLS", default_value_t = 14)]
    pub panel_height: u16,

    /// Redraw interval while idle.
    #[arg(long = "poll-ms", value_name = "MILLIS", default_value_t = 16)]
    pub poll_ms: u64,

    /// Append log lines to this file. Without it, logs are dropped.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long = "log-level", value_name = "LEVEL", default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Cli {
    pub fn store_policy(&self) -> StorePolicy {
        StorePolicy {
            cascade_step: self.cascade_step,
            pointer: self.pointer_mode,
            keys: self.key_scope,
        }
    }

    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            panel: PanelSize::new(self.panel_width, self.panel_height),
            hit_policy: self.hit_policy,
            initial_windows: self.windows,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}

/// Presentation settings for the desktop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewConfig {
    pub panel: PanelSize,
    pub hit_policy: HitPolicy,
    pub initial_windows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_pointer_and_share_keys() {
        let cli = Cli::parse_from(["browser-desk"]);
        assert_eq!(cli.store_policy(), StorePolicy::default());
        assert_eq!(cli.view_config(), ViewConfig::default());
        assert_eq!(cli.poll_interval(), Duration::from_millis(16));
        assert_eq!(cli.log_level, Level::INFO);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn redesign_flags_parse() {
        let cli = Cli::parse_from([
            "browser-desk",
            "--pointer-mode",
            "drag",
            "--key-scope",
            "focused",
            "--hit-policy",
            "topmost",
            "--cascade-step",
            "2",
            "-w",
            "3",
            "--log-level",
            "debug",
        ]);
        let policy = cli.store_policy();
        assert_eq!(policy.pointer, PointerMode::Drag);
        assert_eq!(policy.keys, KeyScope::Focused);
        assert_eq!(policy.cascade_step, 2);
        assert_eq!(cli.view_config().hit_policy, HitPolicy::Topmost);
        assert_eq!(cli.view_config().initial_windows, 3);
        assert_eq!(cli.log_level, Level::DEBUG);
    }
}
