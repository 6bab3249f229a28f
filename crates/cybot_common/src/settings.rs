//! Application settings for the awareness bot.
//!
//! All values have sensible defaults; nothing here is required to exist on
//! disk. Content file paths are resolved relative to the working directory,
//! matching where the bot writes its own default responses file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fallback ASCII logo, used whenever the optional logo file is absent or
/// unreadable. Single shared constant so the loader and the fallback path
/// cannot drift apart.
pub const FALLBACK_LOGO: &str = r"
_____       _                                      _ _
 / ____|     | |                                    (_) |
| |  __  ___ | |__   ___  _ __ ___   ___  ___ _   _ _| |_ _   _
| | |_ |/ _ \| '_ \ / _ \| '_ ` _ \ / _ \/ __| | | | | __| | | |
| |__| | (_) | |_) | (_) | | | | | |  __/ (__| |_| | | |_| |_| |
 \_____|\___/|_.__/ \___/|_| |_| |_|\___|\___|\__, |_|\__|\__, |
  _____         _                    _        __/ |       __/ |
 / ____|       | |                  | |      |___/       |___/
| (___   ___ _ | |__   ___ _ __   __| | ___ _ __
 \___ \ / _ \| | '_ \ / _ \ '_ \ / _` |/ _ \ '__|
 ____) |  __/| | |_) |  __/ | | | (_| |  __/ |
|_____/ \___|_|_.__/ \___|_| |_|\__,_|\___|_|
       _    _
      | |  | |
      | |__| | __ ___      _| | _____  _ __  ___  ___ ___
      |  __  |/ _` \ \ /\ / / |/ / _ \| '_ \/ __|/ __/ __|
      | |  | | (_| |\ V  V /|   < (_) | | | \__ \ (__\__ \
      |_|  |_|\__,_| \_/\_/ |_|\_\___/|_| |_|___/\___|___/

                       +-+ +-+ +-+
                       |A| |B| |C|
                       +-+ +-+ +-+
";

/// Runtime settings for the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Maximum number of entries kept in the input history.
    #[serde(default = "default_history_capacity")]
    pub max_command_history: usize,

    /// Name used when the user never provides one.
    #[serde(default = "default_user_name")]
    pub default_user_name: String,

    /// How many times to ask for a name before falling back.
    #[serde(default = "default_name_attempts")]
    pub max_name_attempts: u32,

    /// Required responses file. Synthesized with defaults when missing.
    pub responses_path: PathBuf,

    /// Optional override files. Used only when present on disk.
    pub tips_path: PathBuf,
    pub jokes_path: PathBuf,
    pub challenges_path: PathBuf,

    /// Optional logo text file; [`FALLBACK_LOGO`] is used otherwise.
    pub logo_path: PathBuf,

    /// Optional welcome audio file, played best-effort at startup.
    pub welcome_audio_path: PathBuf,
}

fn default_history_capacity() -> usize {
    20
}

fn default_user_name() -> String {
    "Cyber Ninja".to_string()
}

fn default_name_attempts() -> u32 {
    3
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            max_command_history: default_history_capacity(),
            default_user_name: default_user_name(),
            max_name_attempts: default_name_attempts(),
            responses_path: PathBuf::from("responses.json"),
            tips_path: PathBuf::from("cybertips.json"),
            jokes_path: PathBuf::from("jokes.json"),
            challenges_path: PathBuf::from("challenges.json"),
            logo_path: PathBuf::from("ascii_logo.txt"),
            welcome_audio_path: PathBuf::from("CybersecurityBotGreeting.wav"),
        }
    }
}
