//! The `queue_managers` service: who manages the queues of a process.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use ccb_api::processes::queue_managers::QueueManagers;
//!
//! let managers = QueueManagers::new(&executor).list(Some(5), None).await?;
//! for manager in &managers.queue_managers {
//!     println!("{:?}", manager.name);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::client::Executor;
use crate::error::ApiError;
use crate::query::QueryObject;
use crate::resource::Resource;

/// Filters for the `queue_managers` service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueueManagerQuery {
    /// Restrict to managers of this process.
    #[serde(rename = "ProcessID", skip_serializing_if = "Option::is_none")]
    pub process_id: Option<u32>,

    /// Restrict to managers of this queue.
    #[serde(rename = "QueueID", skip_serializing_if = "Option::is_none")]
    pub queue_id: Option<u32>,
}

impl QueryObject for QueueManagerQuery {}

/// A single queue manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueManager {
    /// Individual ID of the manager.
    #[serde(default)]
    pub id: Option<u64>,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,

    /// Whether the manager receives queue notifications.
    #[serde(default)]
    pub receive_notifications: Option<bool>,
}

/// Result of the `queue_managers` service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueManagerCollection {
    /// Managers in the order the service returned them.
    #[serde(rename = "queue_manager", default)]
    pub queue_managers: Vec<QueueManager>,
}

impl QueueManagerCollection {
    /// Number of managers returned.
    pub fn len(&self) -> usize {
        self.queue_managers.len()
    }

    /// Returns `true` if no managers were returned.
    pub fn is_empty(&self) -> bool {
        self.queue_managers.is_empty()
    }
}

/// Handle for the `queue_managers` service.
#[derive(Debug, Clone, Copy)]
pub struct QueueManagers<'a> {
    executor: &'a Executor,
}

impl Resource for QueueManagers<'_> {
    const SERVICE: &'static str = "queue_managers";
    type Query = QueueManagerQuery;
    type Output = QueueManagerCollection;
}

impl<'a> QueueManagers<'a> {
    /// Creates a handle bound to `executor`.
    pub fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Lists queue managers, optionally filtered by process and queue.
    pub async fn list(
        &self,
        process_id: Option<u32>,
        queue_id: Option<u32>,
    ) -> Result<QueueManagerCollection, ApiError> {
        let query = QueueManagerQuery {
            process_id,
            queue_id,
        };
        self.list_with(&query).await
    }

    /// Lists queue managers matching `query`.
    pub async fn list_with(
        &self,
        query: &QueueManagerQuery,
    ) -> Result<QueueManagerCollection, ApiError> {
        self.executor.call::<Self>(query).await
    }
}
