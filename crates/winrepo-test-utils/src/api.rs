//! Scripted in-memory implementation of [`RepositoryApi`]

use std::cell::RefCell;

use winrepo_client::{
    CreateRepository, DistributorRecord, Error, QueryParams, RepositoryApi, RepositoryRecord,
    Result, UpdateRepository, UpdateResponse,
};

/// One recorded call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Create(CreateRepository),
    Update(UpdateRepository),
    List(QueryParams),
}

/// Records every call and answers from canned data.
///
/// Created repositories are added to the listing. Single-threaded like the
/// commands it serves, hence the `RefCell`s.
#[derive(Debug, Default)]
pub struct MockRepositoryApi {
    calls: RefCell<Vec<ApiCall>>,
    repositories: RefCell<Vec<RepositoryRecord>>,
    update_response: Option<UpdateResponse>,
    failure: Option<(u16, String)>,
}

impl MockRepositoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve these records from `repositories`
    pub fn with_repositories(mut self, repositories: Vec<RepositoryRecord>) -> Self {
        self.repositories = RefCell::new(repositories);
        self
    }

    /// Answer updates with this response instead of `Completed`
    pub fn with_update_response(mut self, response: UpdateResponse) -> Self {
        self.update_response = Some(response);
        self
    }

    /// Fail every call with the given HTTP status
    pub fn failing(mut self, status: u16, message: impl Into<String>) -> Self {
        self.failure = Some((status, message.into()));
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn list_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, ApiCall::List(_)))
            .count()
    }

    /// The single create request received; panics otherwise
    pub fn created(&self) -> CreateRepository {
        let creates: Vec<_> = self
            .calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                ApiCall::Create(request) => Some(request.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(creates.len(), 1, "expected exactly one create call");
        creates.into_iter().next().unwrap()
    }

    /// The single update request received; panics otherwise
    pub fn updated(&self) -> UpdateRepository {
        let updates: Vec<_> = self
            .calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                ApiCall::Update(request) => Some(request.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(updates.len(), 1, "expected exactly one update call");
        updates.into_iter().next().unwrap()
    }

    fn record(&self, call: ApiCall) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some((status, message)) => Err(Error::Status {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl RepositoryApi for MockRepositoryApi {
    fn create_and_configure(&self, request: &CreateRepository) -> Result<RepositoryRecord> {
        self.record(ApiCall::Create(request.clone()))?;
        let mut record = RepositoryRecord::new(request.id.clone());
        record.display_name = request.display_name.clone();
        record.description = request.description.clone();
        record.notes = request.notes.clone();
        let distributors = request
            .distributors
            .iter()
            .map(|spec| {
                let mut distributor =
                    DistributorRecord::new(spec.distributor_id.clone(), spec.distributor_type_id.clone());
                distributor.config =
                    serde_json::to_value(&spec.distributor_config).unwrap_or_default();
                distributor.auto_publish = spec.auto_publish;
                distributor
            })
            .collect();
        record.distributors = Some(distributors);
        self.repositories.borrow_mut().push(record.clone());
        Ok(record)
    }

    fn update_repo_and_plugins(&self, request: &UpdateRepository) -> Result<UpdateResponse> {
        self.record(ApiCall::Update(request.clone()))?;
        Ok(self
            .update_response
            .clone()
            .unwrap_or(UpdateResponse::Completed))
    }

    fn repositories(&self, query: &QueryParams) -> Result<Vec<RepositoryRecord>> {
        self.record(ApiCall::List(*query))?;
        Ok(self.repositories.borrow().clone())
    }
}
