use crate::core::repository::{LoadReport, Repository};
use crate::utils::error::Result;

/// Where a repository lives between runs.
pub trait BoatStore {
    /// Reads every row into a repository of the given capacity.
    fn load(&self, capacity: usize) -> Result<(Repository, LoadReport)>;

    /// Overwrites the stored rows with the repository's current contents.
    fn save(&self, repository: &Repository) -> Result<()>;
}
