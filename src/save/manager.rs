use super::snapshot::{CURRENT_SNAPSHOT_VERSION, SaveError, SessionSnapshot};
use std::fs;
use std::path::{Path, PathBuf};

pub struct SaveManager {
    save_directory: PathBuf,
    slot: u8,
}

impl SaveManager {
    /// Creates a manager rooted at `save_directory`, creating it if needed
    pub fn new(save_directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let save_directory = save_directory.as_ref().to_path_buf();
        if !save_directory.exists() {
            fs::create_dir_all(&save_directory)?;
        }

        Ok(SaveManager {
            save_directory,
            slot: 1,
        })
    }

    /// The platform save location: `~/.echo-crystal/saves`, falling back to
    /// `./saves` when no home directory can be resolved
    pub fn default_directory() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(".echo-crystal/saves"))
            .unwrap_or_else(|| PathBuf::from("./saves"))
    }

    fn slot_path(&self) -> PathBuf {
        self.save_directory.join(format!("slot_{}.json", self.slot))
    }

    pub fn save_exists(&self) -> bool {
        self.slot_path().exists()
    }

    /// Writes the snapshot as pretty JSON (human-readable, debuggable)
    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<PathBuf, SaveError> {
        let path = self.slot_path();
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, json)?;

        log::info!("session saved to {}", path.display());
        Ok(path)
    }

    /// Reads the slot's snapshot, rejecting versions newer than this build
    pub fn load(&self) -> Result<SessionSnapshot, SaveError> {
        let path = self.slot_path();
        let json = fs::read_to_string(&path)?;
        let snapshot: SessionSnapshot = serde_json::from_str(&json)?;

        if snapshot.version > CURRENT_SNAPSHOT_VERSION {
            return Err(SaveError::InvalidVersion(snapshot.version));
        }

        Ok(snapshot)
    }
}
