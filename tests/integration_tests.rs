use httpmock::prelude::*;
use portfolio_data::{Category, DataOrigin, Portfolio, SheetsClient, SheetsConfig};

fn config_for(server: &MockServer) -> SheetsConfig {
    SheetsConfig {
        spreadsheet_id: "e2e-sheet".to_string(),
        api_key: "e2e-key".to_string(),
        base_url: server.base_url(),
        ..SheetsConfig::default()
    }
}

fn values_path(range: &str) -> String {
    format!("/v4/spreadsheets/e2e-sheet/values/{}", range)
}

#[tokio::test]
async fn test_end_to_end_fetch_all_from_remote() {
    let server = MockServer::start();

    let about_mock = server.mock(|when, then| {
        when.method(GET)
            .path(values_path("About!A:B"))
            .query_param("key", "e2e-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "values": [
                    ["name", "Remote Person"],
                    ["title", "Staff Engineer"],
                    ["yearsExperience", "12"]
                ]
            }));
    });

    let skills_mock = server.mock(|when, then| {
        when.method(GET).path(values_path("Skills!A:B"));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "values": [
                    ["Languages", "Rust, Go"],
                    ["Tools", "Git, Docker"]
                ]
            }));
    });

    let projects_mock = server.mock(|when, then| {
        when.method(GET).path(values_path("Projects!A:F"));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "values": [
                    ["Title", "Description", "TechStack", "Github", "Demo", "Featured"],
                    ["Sheet Loader", "Loads sheets", "Rust", "https://github.com/x/loader", "", "TRUE"]
                ]
            }));
    });

    let contact_mock = server.mock(|when, then| {
        when.method(GET).path(values_path("Contact!A:B"));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "values": [["email", "remote@example.com"]]
            }));
    });

    let config = config_for(&server);
    let client = SheetsClient::new(config.clone());
    let portfolio = Portfolio::new(client, &config);

    let data = portfolio.fetch_all().await;

    about_mock.assert();
    skills_mock.assert();
    projects_mock.assert();
    contact_mock.assert();

    assert_eq!(data.about["name"], "Remote Person");
    assert_eq!(data.skills[0].category, "Languages");
    assert_eq!(data.skills[0].skills, vec!["Rust", "Go"]);
    assert_eq!(data.projects.len(), 1);
    assert_eq!(data.projects[0].id, "sheet-loader");
    assert!(data.projects[0].featured);
    assert_eq!(data.contact["email"], "remote@example.com");

    let status = portfolio.status();
    for category in Category::ALL {
        assert_eq!(status.get(&category), Some(&DataOrigin::Remote));
    }

    // A second bundle is served entirely from cache.
    let cached = portfolio.fetch_all().await;
    assert_eq!(cached.about["name"], "Remote Person");
    about_mock.assert_hits(1);
    skills_mock.assert_hits(1);
    projects_mock.assert_hits(1);
    contact_mock.assert_hits(1);

    let status = portfolio.status();
    for category in Category::ALL {
        assert_eq!(status.get(&category), Some(&DataOrigin::Cache));
    }
}

#[tokio::test]
async fn test_remote_failure_matches_missing_credentials_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(500);
    });

    let failing_config = config_for(&server);
    let failing_client = SheetsClient::new(failing_config.clone());
    let failing = Portfolio::new(failing_client, &failing_config);

    let unconfigured = SheetsConfig::default();
    let offline_client = SheetsClient::new(unconfigured.clone());
    let offline = Portfolio::new(offline_client, &unconfigured);

    assert_eq!(failing.about().await, offline.about().await);
    assert_eq!(failing.skills().await, offline.skills().await);
    assert_eq!(failing.projects().await, offline.projects().await);
    assert_eq!(failing.contact().await, offline.contact().await);

    assert_eq!(
        failing.status().get(&Category::About),
        Some(&DataOrigin::Fallback)
    );
}

#[tokio::test]
async fn test_permission_denied_still_renders_content() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(403);
    });

    let config = config_for(&server);
    let client = SheetsClient::new(config.clone());
    let portfolio = Portfolio::new(client, &config);

    let data = portfolio.fetch_all().await;

    assert!(!data.about.is_empty());
    assert!(!data.projects.is_empty());

    let status = portfolio.status();
    for category in Category::ALL {
        assert_eq!(status.get(&category), Some(&DataOrigin::Fallback));
    }
}
