mod common;

use common::{GRANT, SECRET, assert_all, expect_json, open_client};
use economic_client::open::employee_groups::EmployeeGroup;
use economic_client::open::product_groups::ProductGroup;
use economic_client::open::{
    EmployeeGroups, Employees, ProductGroups, ProjectGroups, Projects, Subscriptions,
    SupplierGroups,
};
use economic_client::{ApiFamily, Page};
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn project_groups_use_default_version_and_cursor() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v22.0.0/projectgroups?cursor=0")
        .match_header("x-appsecrettoken", SECRET)
        .match_header("x-agreementgranttoken", GRANT)
        .with_status(200)
        .with_body(
            json!({
                "items": [{"number": 1, "name": "Internal", "type": 1}],
                "cursor": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let groups = ProjectGroups::from_client(open_client(&server));
    let response = groups.get_all(0).await.expect("project groups");

    mock.assert_async().await;
    assert_eq!(response.data.items.len(), 1);
    assert_eq!(response.data.items[0].group_type, Some(1));
    assert_eq!(response.data.cursor, Some(1));
}

#[tokio::test]
async fn version_override_applies_to_later_calls() {
    let mut server = Server::new_async().await;
    let mocks = vec![
        expect_json(
            &mut server,
            "GET",
            "/api/v23.0.0/projectgroups?cursor=234",
            200,
            r#"{"items": []}"#,
        )
        .await,
        expect_json(
            &mut server,
            "GET",
            "/api/v23.0.0/projectgroups/paged?skippages=0&pagesize=100",
            200,
            "[]",
        )
        .await,
        expect_json(&mut server, "GET", "/api/v23.0.0/projectgroups/5", 200, r#"{"number": 5}"#)
            .await,
    ];

    let mut groups = ProjectGroups::from_client(open_client(&server));
    groups.set_version("v23.0.0");
    let response = groups.get_all(234).await.expect("bulk");
    groups.get(Page::default()).await.expect("paged");
    let single = groups.get_for(5).await.expect("single");

    assert_all(&mocks).await;
    assert_eq!(groups.version(), "v23.0.0");
    assert!(response.data.items.is_empty());
    assert_eq!(response.data.cursor, None);
    assert_eq!(single.data.number, Some(5));
}

#[tokio::test]
async fn empty_version_override_keeps_default() {
    let mut server = Server::new_async().await;
    let mock = expect_json(
        &mut server,
        "GET",
        "/api/v22.0.0/projectgroups?cursor=0",
        200,
        r#"{"items": []}"#,
    )
    .await;

    let mut groups = ProjectGroups::from_client(open_client(&server));
    groups.set_version("");
    groups.get_all(0).await.expect("default version");

    mock.assert_async().await;
    assert_eq!(groups.version(), ProjectGroups::DEFAULT_VERSION);
}

#[tokio::test]
async fn employee_groups_bulk_read_and_create() {
    let mut server = Server::new_async().await;
    let mocks = vec![
        expect_json(
            &mut server,
            "GET",
            "/api/v22.0.0/employeegroups?cursor=10",
            200,
            r#"{"items": [{"number": 1, "name": "Sales"}], "cursor": 11}"#,
        )
        .await,
        expect_json(
            &mut server,
            "GET",
            "/api/v22.0.0/employeegroups/paged?skippages=0&pagesize=100",
            200,
            "[]",
        )
        .await,
    ];
    let create = server
        .mock("POST", "/api/v22.0.0/employeegroups")
        .match_body(Matcher::Json(json!({"name": "Ops"})))
        .with_status(201)
        .with_body(r#"{"number": 2, "name": "Ops"}"#)
        .create_async()
        .await;

    let groups = EmployeeGroups::from_client(open_client(&server));
    let batch = groups.get_all(10).await.expect("bulk");
    groups.get(Page::default()).await.expect("paged");
    let created = groups
        .create(&EmployeeGroup {
            name: Some("Ops".into()),
            ..EmployeeGroup::default()
        })
        .await
        .expect("created");

    assert_all(&mocks).await;
    create.assert_async().await;
    assert_eq!(batch.data.cursor, Some(11));
    assert_eq!(created.data.number, Some(2));
}

#[tokio::test]
async fn projects_bulk_read_has_no_cursor_parameter() {
    let mut server = Server::new_async().await;
    let mock = expect_json(
        &mut server,
        "GET",
        "/api/v22.0.0/projects",
        200,
        r#"{"items": [{"number": 7}]}"#,
    )
    .await;

    let all = Projects::from_client(open_client(&server))
        .get_all()
        .await
        .expect("projects");

    mock.assert_async().await;
    assert_eq!(all.data.items[0].number, Some(7));
}

#[tokio::test]
async fn paged_reads_return_plain_arrays() {
    let mut server = Server::new_async().await;
    let projects = server
        .mock("GET", "/api/v22.0.0/projects/paged?skippages=2&pagesize=10")
        .with_status(200)
        .with_body(r#"[{"number": 7, "name": "Rollout"}]"#)
        .create_async()
        .await;
    let subscriptions = server
        .mock("GET", "/subscriptionsapi/v5.0.1/subscriptions/paged?skippages=0&pagesize=100")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = open_client(&server);
    let found = Projects::from_client(client.clone())
        .get(Page::new(2, 10))
        .await
        .expect("projects");
    let none = Subscriptions::from_client(client)
        .get(Page::default())
        .await
        .expect("subscriptions");

    projects.assert_async().await;
    subscriptions.assert_async().await;
    assert_eq!(found.data[0].number, Some(7));
    assert!(none.data.is_empty());
}

#[tokio::test]
async fn employees_filter_by_group() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/api/v22.0.0/employees/paged?skippages=0&pagesize=100&filter=groupNumber$eq:3",
        )
        .with_status(200)
        .with_body(r#"[{"number": 1, "name": "Ada", "groupNumber": 3}]"#)
        .create_async()
        .await;

    let employees = Employees::from_client(open_client(&server))
        .get_by_group(3, Page::default())
        .await
        .expect("employees");

    mock.assert_async().await;
    assert_eq!(employees.data[0].group_number, Some(3));
}

#[tokio::test]
async fn employee_groups_single_lookup() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v22.0.0/employeegroups/4")
        .with_status(200)
        .with_body(r#"{"number": 4, "name": "Sales"}"#)
        .create_async()
        .await;

    let group = EmployeeGroups::from_client(open_client(&server))
        .get_for(4)
        .await
        .expect("employee group");

    mock.assert_async().await;
    assert_eq!(group.data.name.as_deref(), Some("Sales"));
}

#[tokio::test]
async fn product_groups_count_and_update() {
    let mut server = Server::new_async().await;
    let count = server
        .mock("GET", "/productsapi/v1.1.0/productgroups/count")
        .with_status(200)
        .with_body("12")
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/productsapi/v1.1.0/productgroups")
        .match_body(Matcher::Json(json!({
            "id": 2,
            "name": "Hardware",
            "objectVersion": "abc"
        })))
        .with_status(200)
        .with_body(r#"{"id": 2, "name": "Hardware", "objectVersion": "abd"}"#)
        .create_async()
        .await;

    let groups = ProductGroups::from_client(open_client(&server));
    let total = groups.count().await.expect("count");
    let updated = groups
        .update(&ProductGroup {
            id: Some(2),
            name: Some("Hardware".into()),
            object_version: Some("abc".into()),
            ..ProductGroup::default()
        })
        .await
        .expect("updated");

    count.assert_async().await;
    update.assert_async().await;
    assert_eq!(total.data, 12);
    assert_eq!(updated.data.object_version.as_deref(), Some("abd"));
}

#[tokio::test]
async fn supplier_groups_live_under_capitalized_segment() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/suppliersapi/v1.0.1/Groups/8")
        .with_status(200)
        .with_body(r#"{"number": 8, "name": "Freight"}"#)
        .create_async()
        .await;

    SupplierGroups::from_client(open_client(&server))
        .get_for(8)
        .await
        .expect("supplier group");

    mock.assert_async().await;
}

#[tokio::test]
async fn open_errors_carry_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v22.0.0/projects/99")
        .with_status(401)
        .with_body(r#"{"error_description": "Invalid grant token."}"#)
        .create_async()
        .await;

    let error = Projects::from_client(open_client(&server))
        .get_for(99)
        .await
        .expect_err("unauthorized");

    assert_eq!(error.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
    assert_eq!(
        error.error_description().as_deref(),
        Some("Invalid grant token.")
    );
}

#[test]
fn resources_report_their_family() {
    let credential = common::credential();
    let projects = Projects::new(&credential).expect("client");
    assert_eq!(projects.client().family(), ApiFamily::Open);
    assert_eq!(Projects::SEGMENT, "api/");
    assert_eq!(Subscriptions::DEFAULT_VERSION, "v5.0.1");
}
