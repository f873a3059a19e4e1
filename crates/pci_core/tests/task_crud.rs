use pci_core::{
    FactorSet, MemoryTaskRepository, RepoError, Task, TaskListQuery, TaskOrigin, TaskRepository,
};
use uuid::Uuid;

fn scored_task(origin: TaskOrigin, name: &str) -> Task {
    let mut task = Task::new(origin, name);
    task.factors = FactorSet {
        isr: 1.0,
        cf: 1.0,
        uxi: 1.0,
        rcf: 1.0,
        aep: 1.0,
        l: 0.0,
        mlw: 1.0,
        cgw: 1.0,
        rf: 1.0,
        s: 1.0,
        glri: 1.0,
    };
    task
}

#[test]
fn create_and_get_roundtrip() {
    let mut repo = MemoryTaskRepository::new();

    let task = scored_task(TaskOrigin::Manual, "landing page");
    let id = repo.create_task(&task).unwrap();

    let loaded = repo.get_task(id).unwrap().unwrap();
    assert_eq!(loaded, task);
    assert_eq!(repo.len(), 1);
}

#[test]
fn create_rejects_duplicate_id() {
    let mut repo = MemoryTaskRepository::new();

    let task = scored_task(TaskOrigin::Manual, "landing page");
    repo.create_task(&task).unwrap();

    let err = repo.create_task(&task).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateId(id) if id == task.id));
}

#[test]
fn create_rejects_invalid_task() {
    let mut repo = MemoryTaskRepository::new();

    let mut task = scored_task(TaskOrigin::Manual, "broken");
    task.factors.rcf = f64::NAN;

    let err = repo.create_task(&task).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.is_empty());
}

#[test]
fn update_existing_task() {
    let mut repo = MemoryTaskRepository::new();

    let mut task = scored_task(TaskOrigin::Manual, "draft estimate");
    repo.create_task(&task).unwrap();

    task.task_name = "refined estimate".to_string();
    task.factors.cf = 3.5;
    task.ai_verified_units = 2.25;
    repo.update_task(&task).unwrap();

    let loaded = repo.get_task(task.id).unwrap().unwrap();
    assert_eq!(loaded.task_name, "refined estimate");
    assert_eq!(loaded.factors.cf, 3.5);
    assert_eq!(loaded.ai_verified_units, 2.25);
}

#[test]
fn update_not_found_returns_not_found() {
    let mut repo = MemoryTaskRepository::new();

    let task = scored_task(TaskOrigin::Manual, "missing");
    let err = repo.update_task(&task).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == task.id));
}

#[test]
fn remove_task_then_get_returns_none() {
    let mut repo = MemoryTaskRepository::new();

    let task = scored_task(TaskOrigin::Manual, "short-lived");
    repo.create_task(&task).unwrap();

    repo.remove_task(task.id).unwrap();
    assert_eq!(repo.get_task(task.id).unwrap(), None);

    let err = repo.remove_task(task.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == task.id));
}

#[test]
fn list_orders_by_ascending_id() {
    let mut repo = MemoryTaskRepository::new();

    for name in ["gamma", "alpha", "beta"] {
        repo.create_task(&scored_task(TaskOrigin::Manual, name))
            .unwrap();
    }

    let listed = repo.list_tasks(&TaskListQuery::default()).unwrap();
    assert_eq!(listed.len(), 3);
    let mut ids: Vec<Uuid> = listed.iter().map(|task| task.id).collect();
    let sorted = {
        let mut copy = ids.clone();
        copy.sort();
        copy
    };
    assert_eq!(ids, sorted);
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn list_filters_by_origin() {
    let mut repo = MemoryTaskRepository::new();

    repo.create_task(&scored_task(TaskOrigin::Manual, "typed in"))
        .unwrap();
    repo.create_task(&scored_task(TaskOrigin::CsvImport, "row 1"))
        .unwrap();
    repo.create_task(&scored_task(TaskOrigin::CsvImport, "row 2"))
        .unwrap();

    let imported = repo
        .list_tasks(&TaskListQuery {
            origin: Some(TaskOrigin::CsvImport),
            ..TaskListQuery::default()
        })
        .unwrap();
    assert_eq!(imported.len(), 2);
    assert!(imported
        .iter()
        .all(|task| task.origin == TaskOrigin::CsvImport));
}

#[test]
fn list_applies_limit_and_offset() {
    let mut repo = MemoryTaskRepository::new();

    for index in 0..5 {
        repo.create_task(&scored_task(TaskOrigin::Template, &format!("task {index}")))
            .unwrap();
    }

    let full = repo.list_tasks(&TaskListQuery::default()).unwrap();

    let page = repo
        .list_tasks(&TaskListQuery {
            limit: Some(2),
            offset: 1,
            ..TaskListQuery::default()
        })
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, full[1].id);
    assert_eq!(page[1].id, full[2].id);

    let past_the_end = repo
        .list_tasks(&TaskListQuery {
            limit: Some(10),
            offset: 5,
            ..TaskListQuery::default()
        })
        .unwrap();
    assert!(past_the_end.is_empty());
}
