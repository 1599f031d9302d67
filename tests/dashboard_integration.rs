use httpmock::prelude::*;
use tallyboard::core::query;
use tallyboard::{CliConfig, DashboardEngine, Party, SheetPipeline, SourceStatus};

fn config_for(sheet_url: String) -> CliConfig {
    CliConfig {
        sheet_url,
        revalidate_secs: 60,
        timeout_secs: 10,
        watch: false,
        json: false,
        verbose: false,
        config: None,
    }
}

fn engine_for(sheet_url: String) -> DashboardEngine<SheetPipeline<CliConfig>> {
    let pipeline = SheetPipeline::new(config_for(sheet_url)).unwrap();
    DashboardEngine::new(pipeline)
}

/// 15-column export in the published sheet's layout: division in column A,
/// constituency in C, candidate/vote pairs at F/G, J/K and N/O.
fn sheet_csv() -> String {
    [
        "Division,,Constituency,,,Candidate 1,Votes 1,,,Candidate 2,Votes 2,,,Candidate 3,Votes 3",
        "Dhaka,,Dhaka-1,,,Karim (BNP),\"1,234\",,,Rahim (Jamaat),900,,,Salam (NCP),100",
        ",,Dhaka-2,,,Nasir (Jamaat),800,,,Habib (BNP),700,,,—N/a,0",
        ",,,,,ignored,1,,,ignored,2,,,ignored,3",
        "Barishal,,Barishal-1,,,X,0,,,Y,0,,,Z,0",
    ]
    .join("\n")
}

#[tokio::test]
async fn test_end_to_end_snapshot_from_live_sheet() {
    let server = MockServer::start();
    let sheet_mock = server.mock(|when, then| {
        when.method(GET).path("/export");
        then.status(200)
            .header("Content-Type", "text/csv")
            .body(sheet_csv());
    });

    let data = engine_for(server.url("/export")).dashboard_data().await;

    sheet_mock.assert();
    assert!(matches!(data.status, SourceStatus::Fresh { .. }));

    // The blank-constituency row is dropped; forward-fill carries "Dhaka".
    assert_eq!(data.records.len(), 3);
    assert_eq!(data.records[1].division, "Dhaka");
    assert_eq!(data.records[1].constituency, "Dhaka-2");
    assert_eq!(data.records[0].candidates[0].votes, 1234);

    let agg = &data.aggregate;
    assert_eq!(agg.total_constituencies, 3);
    assert_eq!(agg.declared_seats, 2);
    assert_eq!(agg.undeclared_seats, 1);
    assert_eq!(agg.total_votes, 1234 + 900 + 100 + 800 + 700);
    assert_eq!(agg.wins_by_party[&Party::Bnp], 1);
    assert_eq!(agg.wins_by_party[&Party::Jamaat], 1);
    assert_eq!(agg.wins_by_party[&Party::Ncp], 0);
    assert_eq!(agg.wins_by_division["Dhaka"], 1);
    assert_eq!(agg.wins_by_division["Barishal"], 0);

    assert_eq!(query::divisions(&data.records), vec!["Barishal", "Dhaka"]);
}

#[tokio::test]
async fn test_http_failure_degrades_to_empty_snapshot() {
    let server = MockServer::start();
    let sheet_mock = server.mock(|when, then| {
        when.method(GET).path("/export");
        then.status(500);
    });

    let data = engine_for(server.url("/export")).dashboard_data().await;

    sheet_mock.assert();
    match &data.status {
        SourceStatus::Failed { reason } => assert!(reason.contains("500")),
        other => panic!("expected failed status, got {:?}", other),
    }
    assert!(data.records.is_empty());
    assert_eq!(data.aggregate.total_constituencies, 0);
    assert_eq!(data.aggregate.wins_by_party.values().sum::<u64>(), 0);
}

#[tokio::test]
async fn test_header_only_sheet_yields_no_data_state() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/export");
        then.status(200)
            .body("Division,,Constituency,,,C1,V1,,,C2,V2,,,C3,V3");
    });

    let data = engine_for(server.url("/export")).dashboard_data().await;

    assert!(data.is_fresh());
    assert!(data.records.is_empty());
    assert_eq!(data.aggregate.undeclared_seats, 0);
}

#[tokio::test]
async fn test_narrow_sheet_reports_schema_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/export");
        then.status(200).body("a,b,c\nd,e,f\n");
    });

    let data = engine_for(server.url("/export")).dashboard_data().await;

    match &data.status {
        SourceStatus::Failed { reason } => assert!(reason.contains("schema")),
        other => panic!("expected failed status, got {:?}", other),
    }
    assert!(data.records.is_empty());
}

#[tokio::test]
async fn test_slow_sheet_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/export");
        then.status(200)
            .delay(std::time::Duration::from_millis(1500))
            .body(sheet_csv());
    });

    let mut config = config_for(server.url("/export"));
    config.timeout_secs = 1;
    let engine = DashboardEngine::new(SheetPipeline::new(config).unwrap());

    let data = engine.dashboard_data().await;
    assert!(matches!(data.status, SourceStatus::Failed { .. }));
    assert!(data.records.is_empty());
}
