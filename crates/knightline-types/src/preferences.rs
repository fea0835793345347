//! Account preferences.

use serde::{Deserialize, Serialize};

/// UI and gameplay preferences of the authenticated account.
///
/// Numeric fields are the enum codes used by lichess.org (for example
/// `auto_queen`: 1 = never, 2 = when premoving, 3 = always).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct Preferences {
    pub dark: bool,
    #[serde(rename = "transp")]
    pub transparent: bool,
    pub bg_img: String,
    pub is3d: bool,
    pub theme: String,
    pub piece_set: String,
    pub theme3d: String,
    pub piece_set3d: String,
    pub sound_set: String,
    pub blindfold: i32,
    pub auto_queen: i32,
    pub auto_threefold: i32,
    pub takeback: i32,
    pub moretime: i32,
    pub clock_tenths: i32,
    pub clock_bar: bool,
    pub clock_sound: bool,
    pub premove: bool,
    pub animation: i32,
    pub captured: bool,
    pub follow: bool,
    pub highlight: bool,
    pub destination: bool,
    pub coords: i32,
    pub replay: i32,
    pub challenge: i32,
    pub message: i32,
    pub coord_color: i32,
    pub submit_move: i32,
    pub confirm_resign: i32,
    pub insight_share: i32,
    pub keyboard_move: i32,
    pub zen: i32,
    pub move_event: i32,
    pub rook_castle: i32,
}
