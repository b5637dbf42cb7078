//! Tests for the in-memory employee repository.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::{DEFAULT_DEPARTMENT, ErrorCode};

#[fixture]
fn repo() -> InMemoryEmployeeRepository {
    InMemoryEmployeeRepository::new()
}

fn request(employee_id: &str, name: &str, department: Option<&str>) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        employee_id: employee_id.to_owned(),
        name: name.to_owned(),
        department: department.map(str::to_owned),
    }
}

async fn seed(repo: &InMemoryEmployeeRepository, codes: &[&str]) -> Vec<Employee> {
    let mut created = Vec::with_capacity(codes.len());
    for code in codes {
        let employee = repo
            .create(request(code, "Someone", None))
            .await
            .expect("seed record is valid");
        created.push(employee);
    }
    created
}

#[rstest]
#[tokio::test]
async fn create_defaults_department(repo: InMemoryEmployeeRepository) {
    let ann = repo
        .create(request("E1", "Ann", None))
        .await
        .expect("valid request");

    assert_eq!(ann.id, 1);
    assert_eq!(ann.employee_id, "E1");
    assert_eq!(ann.name, "Ann");
    assert_eq!(ann.department, DEFAULT_DEPARTMENT);
}

#[rstest]
#[tokio::test]
async fn create_then_get_round_trips(repo: InMemoryEmployeeRepository) {
    let created = repo
        .create(request("E1", "Ann", Some("HR")))
        .await
        .expect("valid request");

    let fetched = repo
        .get_by_id(EmployeeLookup { id: created.id })
        .await
        .expect("record exists");

    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test]
async fn blank_names_are_rejected_without_storing(repo: InMemoryEmployeeRepository) {
    let error = repo
        .create(request("E1", "", None))
        .await
        .expect_err("blank name");

    assert_eq!(error.code(), &ErrorCode::INVALID_INPUT);
    assert!(repo.list_all().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test]
async fn duplicate_employee_codes_are_rejected(repo: InMemoryEmployeeRepository) {
    repo.create(request("E1", "Ann", None))
        .await
        .expect("first create");

    let error = repo
        .create(request("E1", "Ann", None))
        .await
        .expect_err("second create");

    assert_eq!(error.code(), &ErrorCode::DUPLICATE_EMPLOYEE_ID);
    assert_eq!(error.status(), 400);
    assert_eq!(
        error.meta().and_then(|meta| meta.get("employeeId")),
        Some(&Value::String("E1".to_owned()))
    );
    assert_eq!(repo.list_all().await.expect("list").len(), 1);
}

#[rstest]
#[tokio::test]
async fn employee_codes_match_exactly(repo: InMemoryEmployeeRepository) {
    repo.create(request("E1", "Ann", None))
        .await
        .expect("first create");

    repo.create(request("e1", "Bob", None))
        .await
        .expect("case differs, so no clash");
}

#[rstest]
#[tokio::test]
async fn list_preserves_insertion_order(repo: InMemoryEmployeeRepository) {
    let created = seed(&repo, &["E3", "E1", "E2"]).await;

    let listed = repo.list_all().await.expect("list");

    assert_eq!(listed, created);
}

#[rstest]
#[case::get(true)]
#[case::delete(false)]
#[tokio::test]
async fn unknown_ids_are_not_found(repo: InMemoryEmployeeRepository, #[case] read: bool) {
    let lookup = EmployeeLookup { id: 999 };
    let error = if read {
        repo.get_by_id(lookup).await.expect_err("empty repository")
    } else {
        repo.delete_by_id(lookup).await.expect_err("empty repository")
    };

    assert_eq!(error.code(), &ErrorCode::NOT_FOUND);
    assert_eq!(error.status(), 404);
    assert_eq!(error.message(), "Employee not found");
}

#[rstest]
#[tokio::test]
async fn delete_removes_exactly_one_record(repo: InMemoryEmployeeRepository) {
    let created = seed(&repo, &["E1", "E2", "E3"]).await;

    repo.delete_by_id(EmployeeLookup { id: 2 })
        .await
        .expect("record exists");

    let remaining = repo.list_all().await.expect("list");
    let ids: Vec<u64> = remaining.iter().map(|employee| employee.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(remaining.iter().all(|employee| created.contains(employee)));
}

#[rstest]
#[tokio::test]
async fn identifiers_are_not_reused_after_deletion(repo: InMemoryEmployeeRepository) {
    seed(&repo, &["E1", "E2"]).await;
    repo.delete_by_id(EmployeeLookup { id: 1 })
        .await
        .expect("record exists");

    let next = repo
        .create(request("E3", "Cat", None))
        .await
        .expect("valid request");

    assert_eq!(next.id, 3);
    let ids: Vec<u64> = repo
        .list_all()
        .await
        .expect("list")
        .into_iter()
        .map(|employee| employee.id)
        .collect();
    assert_eq!(ids, vec![2, 3]);
}

#[rstest]
#[tokio::test]
async fn deleted_employee_codes_can_be_reused(repo: InMemoryEmployeeRepository) {
    let first = repo
        .create(request("E1", "Ann", None))
        .await
        .expect("first create");
    repo.delete_by_id(EmployeeLookup { id: first.id })
        .await
        .expect("record exists");

    let again = repo
        .create(request("E1", "Ann", None))
        .await
        .expect("code is free again");
    assert_ne!(again.id, first.id);
}

#[rstest]
#[tokio::test]
async fn concurrent_creates_with_the_same_code_store_one_record() {
    let repo = Arc::new(InMemoryEmployeeRepository::new());
    let mut handles = Vec::new();
    for _ in 0..8 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.create(request("E1", "Ann", None)).await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.expect("task completes").is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(repo.list_all().await.expect("list").len(), 1);
}

#[rstest]
#[tokio::test]
async fn poisoned_store_reports_internal_errors() {
    let repo = Arc::new(InMemoryEmployeeRepository::new());
    let poisoner = Arc::clone(&repo);
    let joined = std::thread::spawn(move || {
        let _records = poisoner.records.lock().expect("first lock succeeds");
        panic!("poison the store");
    })
    .join();
    assert!(joined.is_err());

    let error = repo.list_all().await.expect_err("store is poisoned");

    assert_eq!(error.code(), &ErrorCode::INTERNAL_ERROR);
    assert_eq!(error.status(), 500);
    assert_eq!(
        error.message(),
        "employee repository unavailable: employee store lock poisoned"
    );
}
