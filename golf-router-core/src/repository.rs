//! Read-only access to persisted locations.
//!
//! One [`LocationRepository`] trait serves every [`LocationKind`]; concrete
//! stores decide which dataset and columns back a given kind.

use rand::RngCore;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::{Location, LocationKind};

/// Errors returned by [`LocationRepository`] lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No record carries the requested identifier.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Label of the searched dataset.
        kind: LocationKind,
        /// Requested identifier.
        id: u64,
    },
    /// More records were requested than the dataset holds.
    #[error("cannot sample {requested} {kind} records from {available}")]
    SampleTooLarge {
        /// Label of the searched dataset.
        kind: LocationKind,
        /// Requested sample size.
        requested: usize,
        /// Number of records available.
        available: usize,
    },
}

/// Read-only access to the locations of a single [`LocationKind`].
///
/// # Examples
///
/// ```rust
/// use golf_router_core::{Location, LocationKind, LocationRepository, RepositoryError};
///
/// struct Fixed(Vec<Location>);
///
/// impl LocationRepository for Fixed {
///     fn kind(&self) -> LocationKind {
///         LocationKind::Station
///     }
///
///     fn read_all(&self) -> Vec<Location> {
///         self.0.clone()
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let repo = Fixed(vec![Location::station(1, "Tokyo", 35.6814, 139.7661)?]);
/// assert_eq!(repo.read_by_id(1)?.name(), "Tokyo");
/// assert!(matches!(repo.read_by_id(2), Err(RepositoryError::NotFound { id: 2, .. })));
/// # Ok(())
/// # }
/// ```
pub trait LocationRepository {
    /// Label of the locations held by this repository.
    fn kind(&self) -> LocationKind;

    /// Every location, in storage order.
    fn read_all(&self) -> Vec<Location>;

    /// The location with identifier `id`.
    ///
    /// When several records share `id` the first in storage order wins.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no record matches.
    fn read_by_id(&self, id: u64) -> Result<Location, RepositoryError> {
        self.read_all()
            .into_iter()
            .find(|location| location.id() == id)
            .ok_or(RepositoryError::NotFound {
                kind: self.kind(),
                id,
            })
    }

    /// `count` distinct records chosen uniformly at random without
    /// replacement.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::SampleTooLarge`] when `count` exceeds the
    /// number of stored records.
    fn read_random_sample(
        &self,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Location>, RepositoryError> {
        let all = self.read_all();
        if count > all.len() {
            return Err(RepositoryError::SampleTooLarge {
                kind: self.kind(),
                requested: count,
                available: all.len(),
            });
        }
        Ok(all.choose_multiple(rng, count).cloned().collect())
    }
}
