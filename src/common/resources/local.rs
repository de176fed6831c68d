use crate::common::error::TaggerError;
use crate::resources::ResourceProvider;
use std::path::PathBuf;

/// # Local resource
#[derive(Debug, PartialEq, Clone)]
pub struct LocalResource {
    /// Local path for the resource
    pub local_path: PathBuf,
}

impl ResourceProvider for LocalResource {
    /// Gets the path for a local resource.
    ///
    /// # Returns
    ///
    /// * `PathBuf` pointing to the resource file
    ///
    /// # Errors
    ///
    /// * `TaggerError::IOError` if the file does not exist
    fn get_local_path(&self) -> Result<PathBuf, TaggerError> {
        if self.local_path.is_file() {
            Ok(self.local_path.clone())
        } else {
            Err(TaggerError::IOError(format!(
                "resource not found: {}",
                self.local_path.display()
            )))
        }
    }
}

impl From<PathBuf> for LocalResource {
    fn from(local_path: PathBuf) -> Self {
        LocalResource { local_path }
    }
}

impl From<&str> for LocalResource {
    fn from(local_path: &str) -> Self {
        LocalResource {
            local_path: PathBuf::from(local_path),
        }
    }
}
