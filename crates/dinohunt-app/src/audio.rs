//! Sound bank: loads the gunshot and bite clips from an asset directory.
//!
//! A clip that fails to load is logged and left out; playing it afterwards
//! is a silent no-op. Nothing here can fail a tick.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, trace, warn};

use dinohunt_core::collaborators::AudioPlayer;
use dinohunt_core::enums::SoundId;

#[derive(Debug, Error)]
pub enum SoundError {
    #[error("failed to read sound asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("sound asset {path} is empty")]
    Empty { path: PathBuf },
}

/// Read one clip into memory.
pub fn load_clip(path: &Path) -> Result<Vec<u8>, SoundError> {
    let bytes = fs::read(path).map_err(|source| SoundError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(SoundError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(bytes)
}

/// Decoded-on-demand clips keyed by sound. Headless: "playing" records the
/// request and logs it.
#[derive(Debug, Default)]
pub struct SoundBank {
    clips: HashMap<SoundId, Vec<u8>>,
    played: u64,
}

impl SoundBank {
    /// A bank with no clips; every `play` is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every known sound from `dir`, skipping the ones that fail.
    pub fn load(dir: &Path) -> Self {
        let mut clips = HashMap::new();
        for sound in SoundId::ALL {
            let path = dir.join(sound.file_name());
            match load_clip(&path) {
                Ok(bytes) => {
                    debug!(?sound, bytes = bytes.len(), "sound loaded");
                    clips.insert(sound, bytes);
                }
                Err(err) => warn!(?sound, error = %err, "sound unavailable, playback disabled"),
            }
        }
        info!(dir = %dir.display(), loaded = clips.len(), "sound bank ready");
        Self { clips, played: 0 }
    }

    pub fn is_loaded(&self, sound: SoundId) -> bool {
        self.clips.contains_key(&sound)
    }

    /// How many plays reached a loaded clip.
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioPlayer for SoundBank {
    fn play(&mut self, sound: SoundId) {
        match self.clips.get(&sound) {
            Some(clip) => {
                self.played += 1;
                trace!(?sound, bytes = clip.len(), "play");
            }
            None => trace!(?sound, "play skipped, clip not loaded"),
        }
    }
}
