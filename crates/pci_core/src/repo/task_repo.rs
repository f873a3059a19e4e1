//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the working set of estimation tasks.
//! - Leave durable storage to adapters owned by the surrounding application;
//!   the core only defines the seam they implement.
//!
//! # Invariants
//! - Write paths call `Task::validate()` before mutating the collection.
//! - Listing order is deterministic: ascending task id.

use crate::model::task::{Task, TaskId, TaskOrigin, TaskValidationError};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for task persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    NotFound(TaskId),
    DuplicateId(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateId(id) => write!(f, "task already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Query options for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskListQuery {
    pub origin: Option<TaskOrigin>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for task CRUD operations.
///
/// The surrounding application implements this over its own backend; the
/// core ships [`MemoryTaskRepository`] for in-process working sets and tests.
pub trait TaskRepository {
    fn create_task(&mut self, task: &Task) -> RepoResult<TaskId>;
    fn update_task(&mut self, task: &Task) -> RepoResult<()>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
    fn remove_task(&mut self, id: TaskId) -> RepoResult<()>;
}

/// In-memory task repository keyed by task id.
#[derive(Debug, Default)]
pub struct MemoryTaskRepository {
    tasks: BTreeMap<TaskId, Task>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskRepository for MemoryTaskRepository {
    fn create_task(&mut self, task: &Task) -> RepoResult<TaskId> {
        task.validate()?;
        if self.tasks.contains_key(&task.id) {
            return Err(RepoError::DuplicateId(task.id));
        }
        self.tasks.insert(task.id, task.clone());
        Ok(task.id)
    }

    fn update_task(&mut self, task: &Task) -> RepoResult<()> {
        task.validate()?;
        match self.tasks.get_mut(&task.id) {
            Some(stored) => {
                *stored = task.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound(task.id)),
        }
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        Ok(self.tasks.get(&id).cloned())
    }

    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        // BTreeMap iteration yields ascending ids, which is the contract's
        // deterministic listing order.
        let matches = self
            .tasks
            .values()
            .filter(|task| query.origin.map_or(true, |origin| task.origin == origin))
            .skip(query.offset as usize);

        let tasks = match query.limit {
            Some(limit) => matches.take(limit as usize).cloned().collect(),
            None => matches.cloned().collect(),
        };
        Ok(tasks)
    }

    fn remove_task(&mut self, id: TaskId) -> RepoResult<()> {
        match self.tasks.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound(id)),
        }
    }
}
