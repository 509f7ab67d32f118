//! Directory endpoints (yenta): vendors and persons attached to
//! transactions, plus the CSV export.

use crate::config::Config;
use crate::error::RezenError;
use crate::model::PagedResponse;
use crate::model::directory::{DirectoryPerson, DirectorySearchParams, Vendor};
use crate::transport::{ApiRequest, RequestExecutor};
use std::sync::Arc;

/// Client for the directory API.
pub struct DirectoryClient {
    executor: RequestExecutor,
}

impl DirectoryClient {
    /// Creates a client against the configured yenta base URL.
    pub fn new(config: Arc<Config>) -> Result<Self, RezenError> {
        let base_url = config.endpoints.yenta.clone();
        Ok(Self {
            executor: RequestExecutor::new(config, base_url)?,
        })
    }

    /// Pages through vendors matching the given filters.
    pub fn search_vendors(
        &self,
        params: &DirectorySearchParams,
    ) -> Result<PagedResponse<Vendor>, RezenError> {
        let mut request = ApiRequest::get("/directory/vendors/search");
        for (name, value) in params.to_query() {
            request = request.with_query(name, value);
        }
        self.executor.execute(&request)?.decode()
    }

    /// Pages through persons matching the given filters.
    pub fn search_persons(
        &self,
        params: &DirectorySearchParams,
    ) -> Result<PagedResponse<DirectoryPerson>, RezenError> {
        let mut request = ApiRequest::get("/directory/persons/search");
        for (name, value) in params.to_query() {
            request = request.with_query(name, value);
        }
        self.executor.execute(&request)?.decode()
    }

    /// Downloads the vendor directory as CSV text.
    ///
    /// This endpoint does not answer JSON; the body is passed through raw.
    pub fn download_vendors_csv(
        &self,
        params: &DirectorySearchParams,
    ) -> Result<String, RezenError> {
        let mut request = ApiRequest::get("/directory/vendors/download");
        for (name, value) in params.to_query() {
            request = request.with_query(name, value);
        }
        self.executor.execute_raw(&request)
    }
}
