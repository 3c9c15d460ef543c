//! Integration tests for query authorization scoping.
//!
//! These tests verify that non-privileged callers only ever see customers
//! registered under their own invitation code, whatever filters they request,
//! and that the privileged account sees everything.
//!
//! Run with: `cargo test -p veltis-api-customers query_scope -- --ignored`

mod common;

use common::*;
use uuid::Uuid;
use veltis_api_customers::models::ListCustomersQuery;
use veltis_api_customers::services::{CustomerService, PRIVILEGED_USERNAME};
use veltis_core::{Caller, UserId};
use veltis_db::CustomerQueryCriteria;

fn admin_caller() -> Caller {
    Caller::new(
        UserId::new(),
        PRIVILEGED_USERNAME,
        vec!["admin".to_string()],
    )
}

fn scoped_caller(user_id: Uuid) -> Caller {
    Caller::new(UserId::from_uuid(user_id), "ops-7", vec!["admin".to_string()])
}

fn query_with_code(code: Option<String>) -> ListCustomersQuery {
    ListCustomersQuery {
        offset: None,
        limit: None,
        customer_name: None,
        customer_num: None,
        invitation_code: code,
    }
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_caller_without_binding_sees_nothing() {
    let pool = create_test_pool().await;
    let service = CustomerService::new(pool.clone());

    let code = unique_code();
    create_test_bind(&pool, Uuid::new_v4(), &code).await;
    create_test_customer(&pool, &unique_num(), &unique_name(), &code).await;

    // The caller owns no binding at all.
    let caller = scoped_caller(Uuid::new_v4());
    let response = service
        .query_page(&caller, &query_with_code(None))
        .await
        .expect("query should succeed");

    assert!(response.customers.is_empty());
    assert_eq!(response.pagination.total_count, 0);

    cleanup_customers_by_codes(&pool, &[&code]).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_caller_with_binding_sees_only_own_code() {
    let pool = create_test_pool().await;
    let service = CustomerService::new(pool.clone());

    let caller_id = Uuid::new_v4();
    let own_code = unique_code();
    let other_code = unique_code();
    create_test_bind(&pool, caller_id, &own_code).await;
    create_test_bind(&pool, Uuid::new_v4(), &other_code).await;

    let own_customer =
        create_test_customer(&pool, &unique_num(), &unique_name(), &own_code).await;
    create_test_customer(&pool, &unique_num(), &unique_name(), &other_code).await;

    // The caller requests the OTHER code; the filter must be overridden.
    let caller = scoped_caller(caller_id);
    let response = service
        .query_page(&caller, &query_with_code(Some(other_code.clone())))
        .await
        .expect("query should succeed");

    assert_eq!(response.customers.len(), 1);
    assert_eq!(response.customers[0].id, own_customer);
    assert_eq!(response.customers[0].invitation_code, own_code);

    cleanup_customers_by_codes(&pool, &[&own_code, &other_code]).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_privileged_caller_filter_is_honored() {
    let pool = create_test_pool().await;
    let service = CustomerService::new(pool.clone());

    let first_code = unique_code();
    let second_code = unique_code();
    create_test_bind(&pool, Uuid::new_v4(), &first_code).await;
    create_test_bind(&pool, Uuid::new_v4(), &second_code).await;
    create_test_customer(&pool, &unique_num(), &unique_name(), &first_code).await;
    create_test_customer(&pool, &unique_num(), &unique_name(), &second_code).await;

    // Unfiltered: the privileged account sees customers under both codes.
    let all = service
        .query_all(&admin_caller(), CustomerQueryCriteria::default())
        .await
        .expect("query should succeed");
    let seen_codes: Vec<&str> = all.iter().map(|c| c.invitation_code.as_str()).collect();
    assert!(seen_codes.contains(&first_code.as_str()));
    assert!(seen_codes.contains(&second_code.as_str()));

    // Filtered: the requested code is applied as-is.
    let response = service
        .query_page(&admin_caller(), &query_with_code(Some(second_code.clone())))
        .await
        .expect("query should succeed");
    assert_eq!(response.customers.len(), 1);
    assert_eq!(response.customers[0].invitation_code, second_code);

    cleanup_customers_by_codes(&pool, &[&first_code, &second_code]).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_export_set_matches_visible_rows() {
    let pool = create_test_pool().await;
    let service = CustomerService::new(pool.clone());

    let caller_id = Uuid::new_v4();
    let own_code = unique_code();
    let other_code = unique_code();
    create_test_bind(&pool, caller_id, &own_code).await;
    create_test_bind(&pool, Uuid::new_v4(), &other_code).await;

    create_test_customer(&pool, &unique_num(), &unique_name(), &own_code).await;
    create_test_customer(&pool, &unique_num(), &unique_name(), &own_code).await;
    create_test_customer(&pool, &unique_num(), &unique_name(), &other_code).await;

    let caller = scoped_caller(caller_id);
    let visible = service
        .query_all(&caller, CustomerQueryCriteria::default())
        .await
        .expect("query should succeed");
    assert_eq!(visible.len(), 2);

    let mut sink = Vec::new();
    service
        .download(&visible, &mut sink)
        .expect("export should succeed");
    assert_eq!(&sink[..2], b"PK");

    cleanup_customers_by_codes(&pool, &[&own_code, &other_code]).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_pagination_envelope_counts_full_set() {
    let pool = create_test_pool().await;
    let service = CustomerService::new(pool.clone());

    let code = unique_code();
    create_test_bind(&pool, Uuid::new_v4(), &code).await;
    for _ in 0..3 {
        create_test_customer(&pool, &unique_num(), &unique_name(), &code).await;
    }

    let query = ListCustomersQuery {
        offset: Some(0),
        limit: Some(2),
        customer_name: None,
        customer_num: None,
        invitation_code: Some(code.clone()),
    };
    let response = service
        .query_page(&admin_caller(), &query)
        .await
        .expect("query should succeed");

    assert_eq!(response.customers.len(), 2);
    assert_eq!(response.pagination.total_count, 3);
    assert!(response.pagination.has_more);

    cleanup_customers_by_codes(&pool, &[&code]).await;
}
