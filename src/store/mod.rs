use crate::api::client::{ApiError, TaskApi};
use crate::api::wire::{TaskPayload, TaskWire};
use crate::model::task::{Status, Task};

/// Error type for view-model operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("task not found: {0}")]
    NotFound(u64),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A partial edit to an existing task. `None` fields keep their cached
/// value; `description: Some("")` clears the description.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
}

impl TaskPatch {
    /// A patch that only changes the status.
    pub fn status(status: Status) -> TaskPatch {
        TaskPatch {
            status: Some(status),
            ..TaskPatch::default()
        }
    }
}

/// Local cache of the remote task collection plus the operations that
/// keep the two in sync.
///
/// Every operation validates locally first, then talks to the API, and
/// only touches the cache once the request has succeeded. A failed
/// request leaves the cache exactly as it was; the user re-triggers the
/// action if they want a retry.
pub struct TaskStore<A: TaskApi> {
    api: A,
    tasks: Vec<Task>,
}

impl<A: TaskApi> TaskStore<A> {
    pub fn new(api: A) -> TaskStore<A> {
        TaskStore {
            api,
            tasks: Vec::new(),
        }
    }

    /// The cached tasks, in server order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the full collection and replace the cache wholesale.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let wires = self.api.list()?;
        self.tasks = wires.into_iter().map(TaskWire::into_task).collect();
        Ok(())
    }

    /// Create a task. A blank title is rejected before any request is
    /// made.
    pub fn create(
        &mut self,
        title: &str,
        description: Option<&str>,
        status: Status,
    ) -> Result<Task, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let description = description.map(str::trim).filter(|d| !d.is_empty());
        let payload = TaskPayload::from_parts(title, description, status);
        let created = self.api.create(&payload)?.into_task();
        self.tasks.push(created.clone());
        Ok(created)
    }

    /// Merge `patch` into the cached record and send the full merged
    /// record to the server (the endpoint replaces, it does not patch).
    /// Unknown ids fail locally without a request.
    pub fn update(&mut self, id: u64, patch: &TaskPatch) -> Result<Task, StoreError> {
        let cached = self.get(id).ok_or(StoreError::NotFound(id))?;

        let mut merged = cached.clone();
        if let Some(title) = &patch.title {
            merged.title = title.trim().to_string();
        }
        if let Some(description) = &patch.description {
            let trimmed = description.trim();
            merged.description = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
        if let Some(status) = patch.status {
            merged.status = status;
        }
        if merged.title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let payload = TaskPayload::from_task(&merged);
        let updated = self.api.update(id, &payload)?.into_task();
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Delete a task. Unknown ids fail locally without a request.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        self.api.delete(id)?;
        self.tasks.retain(|t| t.id != id);
        Ok(())
    }
}
