use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

/// Per-job scratch directory holding the downloaded source file and the
/// converted output. The whole tree is removed recursively on drop, so every
/// exit path of a job (return, error, task abort) reclaims it.
pub struct JobWorkspace {
    dir: TempDir,
}

impl JobWorkspace {
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("file2voice-").tempdir()?;
        Ok(JobWorkspace { dir })
    }

    /// Destination for the downloaded attachment.
    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join("input")
    }

    /// Target for the converted file. The `.ogg` extension selects the
    /// output container.
    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("output.ogg")
    }
}
