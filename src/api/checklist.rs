//! Checklist endpoints (sherlock), including multipart document upload.

use crate::config::Config;
use crate::error::RezenError;
use crate::model::checklist::{Checklist, ChecklistItem};
use crate::transport::{ApiRequest, Body, FilePart, RequestExecutor};
use crate::utils::ids::require_uuid;
use std::sync::Arc;
use tracing::info;

/// Client for the checklist API.
pub struct ChecklistClient {
    executor: RequestExecutor,
}

impl ChecklistClient {
    /// Creates a client against the configured sherlock base URL.
    pub fn new(config: Arc<Config>) -> Result<Self, RezenError> {
        let base_url = config.endpoints.sherlock.clone();
        Ok(Self {
            executor: RequestExecutor::new(config, base_url)?,
        })
    }

    /// Fetches a checklist with its items.
    pub fn get_checklist(&self, checklist_id: &str) -> Result<Checklist, RezenError> {
        require_uuid("checklist_id", checklist_id)?;
        self.executor
            .execute(&ApiRequest::get(format!("/checklists/{checklist_id}")))?
            .decode()
    }

    /// Fetches a single checklist item.
    pub fn get_checklist_item(&self, item_id: &str) -> Result<ChecklistItem, RezenError> {
        require_uuid("item_id", item_id)?;
        self.executor
            .execute(&ApiRequest::get(format!(
                "/checklists/checklist-items/{item_id}"
            )))?
            .decode()
    }

    /// Marks a checklist item complete or incomplete.
    pub fn complete_checklist_item(
        &self,
        item_id: &str,
        is_complete: bool,
    ) -> Result<(), RezenError> {
        require_uuid("item_id", item_id)?;
        self.executor
            .execute(
                &ApiRequest::put(format!("/checklists/checklist-items/{item_id}/complete"))
                    .with_query("isComplete", is_complete.to_string()),
            )
            .map(|_| ())
    }

    /// Deletes a checklist item.
    pub fn delete_checklist_item(&self, item_id: &str) -> Result<(), RezenError> {
        require_uuid("item_id", item_id)?;
        self.executor
            .execute(&ApiRequest::delete(format!(
                "/checklists/checklist-items/{item_id}"
            )))
            .map(|_| ())
    }

    /// Uploads a document against a checklist item as multipart form data.
    ///
    /// Required fields are checked before any network call; a missing name
    /// or empty file fails fast as [`RezenError::InvalidInput`].
    ///
    /// # Arguments
    /// * `item_id` - Checklist item the document belongs to
    /// * `name` - Document display name
    /// * `description` - Document description
    /// * `uploader_id` - Yenta id of the uploading user
    /// * `transaction_id` - Transaction the checklist belongs to
    /// * `file_name` - Name of the uploaded file
    /// * `contents` - File contents
    #[allow(clippy::too_many_arguments)]
    pub fn upload_document(
        &self,
        item_id: &str,
        name: &str,
        description: &str,
        uploader_id: &str,
        transaction_id: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<Body, RezenError> {
        require_uuid("item_id", item_id)?;
        require_uuid("uploader_id", uploader_id)?;
        require_uuid("transaction_id", transaction_id)?;
        if name.trim().is_empty() {
            return Err(RezenError::InvalidInput(
                "document name must not be empty".to_string(),
            ));
        }
        if file_name.trim().is_empty() {
            return Err(RezenError::InvalidInput(
                "file name must not be empty".to_string(),
            ));
        }
        if contents.is_empty() {
            return Err(RezenError::InvalidInput(
                "file contents must not be empty".to_string(),
            ));
        }

        let fields = vec![
            ("name".to_string(), name.to_string()),
            ("description".to_string(), description.to_string()),
            ("uploaderId".to_string(), uploader_id.to_string()),
            ("transactionId".to_string(), transaction_id.to_string()),
        ];
        let files = vec![FilePart {
            field_name: "file".to_string(),
            file_name: file_name.to_string(),
            bytes: contents,
        }];

        info!("Uploading document '{}' to checklist item {}", name, item_id);
        self.executor.execute(
            &ApiRequest::post(format!("/checklists/checklist-items/{item_id}/documents"))
                .with_multipart(fields, files),
        )
    }
}
