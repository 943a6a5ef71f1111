use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

/// Problems with the game configuration. All of them are fatal at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    NonPositiveTick(f64),
    NonPositiveCellSize(f32),
    HissProbabilityOutOfRange(f64),
    ArenaTooSmall { half_width: i32, half_height: i32 },
    ArenaTooLarge { half_width: i32, half_height: i32 },
    MissingAudioClip(PathBuf),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTick(seconds) => {
                write!(f, "tick length must be positive, got {seconds}s")
            }
            Self::NonPositiveCellSize(size) => {
                write!(f, "cell size must be positive, got {size}px")
            }
            Self::HissProbabilityOutOfRange(p) => {
                write!(f, "hiss probability must lie in [0, 1], got {p}")
            }
            Self::ArenaTooSmall {
                half_width,
                half_height,
            } => write!(
                f,
                "arena of half extents {half_width}x{half_height} leaves no room for food"
            ),
            Self::ArenaTooLarge {
                half_width,
                half_height,
            } => write!(
                f,
                "arena of half extents {half_width}x{half_height} is too large, the limit is {}",
                crate::resources::MAX_ARENA_HALF_EXTENT
            ),
            Self::MissingAudioClip(path) => {
                write!(f, "audio clip not found: {}", path.display())
            }
        }
    }
}

impl Error for SettingsError {}
