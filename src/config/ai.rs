//! `[ai]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[ai]` section in folio.toml - the external text generator.
///
/// The prompt is passed as one argument between `command` and `args`:
/// `claude -p <prompt> --output-format text`.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AiConfig {
    #[serde(default = "defaults::ai::command")]
    #[educe(Default = defaults::ai::command())]
    pub command: Vec<String>,

    #[serde(default = "defaults::ai::args")]
    #[educe(Default = defaults::ai::args())]
    pub args: Vec<String>,
}
