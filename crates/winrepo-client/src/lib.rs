//! Client side of the repository server's REST API.
//!
//! Commands talk to the server through the [`RepositoryApi`] trait;
//! [`HttpRepositoryApi`] is the blocking HTTP implementation used by the
//! `winrepo` binary.

pub mod api;
pub mod error;
pub mod http;
pub mod model;

pub use api::{
    CreateRepository, DistributorSpec, QueryParams, RepositoryApi, UpdateRepository,
};
pub use error::{Error, Result};
pub use http::HttpRepositoryApi;
pub use model::{DistributorRecord, Notes, Reason, RepositoryRecord, SpawnedTask, UpdateResponse};
