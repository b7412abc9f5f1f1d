//! Client Module Tests
//!
//! Exercises the repository API against the embedded local backend.
//!
//! *Note: the remote backend needs a running grid server to talk to; its
//! behavior is covered by running the demo binary against the server.*

use crate::client::repository::CustomerRepository;
use crate::model::Customer;

#[tokio::test]
async fn test_local_repository_demo_scenario() {
    let repository = CustomerRepository::local("customers");

    assert_eq!(repository.count().await.unwrap(), 0);

    let jon_doe = Customer::new_customer(1, "Jon Doe");
    let jon_doe = repository.save(jon_doe).await.unwrap();

    assert_eq!(jon_doe.id(), 1);
    assert_eq!(jon_doe.name(), "Jon Doe");
    assert_eq!(repository.count().await.unwrap(), 1);

    let retrieved = repository.find_by_id(1).await.unwrap();
    assert_eq!(retrieved, Some(jon_doe.clone()));

    let queried = repository.find_by_name_like("%Doe").await.unwrap();
    assert_eq!(queried, Some(jon_doe));
}

#[tokio::test]
async fn test_local_repository_find_by_id_missing() {
    let repository = CustomerRepository::local("customers");

    assert!(repository.find_by_id(404).await.unwrap().is_none());
}

#[tokio::test]
async fn test_local_repository_query_without_match() {
    let repository = CustomerRepository::local("customers");

    repository
        .save(Customer::new_customer(1, "Jon Doe"))
        .await
        .unwrap();

    let result = repository.find_by_name_like("%Smith").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_local_repository_resave_updates_index() {
    let repository = CustomerRepository::local("customers");

    repository
        .save(Customer::new_customer(1, "Jon Doe"))
        .await
        .unwrap();
    repository
        .save(Customer::new_customer(1, "Jon Smith"))
        .await
        .unwrap();

    // The old name no longer matches; the new one does.
    assert!(repository
        .find_by_name_like("%Doe")
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        repository.find_by_name_like("%Smith").await.unwrap(),
        Some(Customer::new_customer(1, "Jon Smith"))
    );
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_local_repository_identify_stamps_fresh_id() {
    let repository = CustomerRepository::local("customers");

    let identified = repository
        .identify(Customer::new_customer(0, "Pie Doe"))
        .await
        .unwrap();

    assert_eq!(identified.name(), "Pie Doe");
    // Seeded from wall-clock millis, so far above any demo id.
    assert!(identified.id() > 1_000_000);

    let again = repository
        .identify(Customer::new_customer(0, "Pie Doe"))
        .await
        .unwrap();
    assert_eq!(again.id(), identified.id() + 1);
}
