use std::path::{Path, PathBuf};

use crate::{encode::png, foundation::error::CardResult};

/// Everything the composer needs for one card, already resolved.
///
/// Avatar fields carry raw encoded image bytes; fetching them (and resolving
/// the inviter from audit history) is the calling collaborator's job. The
/// composition core never performs network IO.
#[derive(Clone, Debug)]
pub struct WelcomeCardRequest {
    pub member_name: String,
    pub member_id: u64,
    /// Encoded image bytes (PNG/JPEG/...) for the member's avatar.
    pub member_avatar: Vec<u8>,
    /// Present only when the collaborator resolved an inviter; `None` omits
    /// the badge entirely.
    pub inviter: Option<Inviter>,
    pub member_count: u64,
}

/// Identity credited with bringing the new member in.
#[derive(Clone, Debug)]
pub struct Inviter {
    pub name: String,
    /// Encoded image bytes for the inviter's avatar.
    pub avatar: Vec<u8>,
}

/// A finished card: encoded PNG held in memory until the caller decides to
/// persist it.
#[derive(Clone, Debug)]
pub struct WelcomeCard {
    pub member_id: u64,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl WelcomeCard {
    /// File name convention for published artifacts.
    pub fn file_name(&self) -> String {
        format!("welcome_{}.png", self.member_id)
    }

    /// Publish the card under `dir` atomically and return the final path.
    ///
    /// The bytes land in a temporary file first and are renamed into place,
    /// so observers of `dir` never see a partial artifact.
    pub fn write_to_dir(&self, dir: &Path) -> CardResult<PathBuf> {
        let path = dir.join(self.file_name());
        png::write_atomic(&path, &self.png)?;
        Ok(path)
    }
}
