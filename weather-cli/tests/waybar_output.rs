//! Runs the `hyde-weather` binary against a mock Open-Meteo server.

use std::{
    io::Write,
    process::{Command, Output},
    time::Duration,
};

use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const WEATHER_VARS: [&str; 8] = [
    "WEATHER_TEMPERATURE_UNIT",
    "WEATHER_TIME_FORMAT",
    "WEATHER_WINDSPEED_UNIT",
    "WEATHER_SHOW_ICON",
    "WEATHER_SHOW_LOCATION",
    "WEATHER_SHOW_TODAY_DETAILS",
    "WEATHER_FORECAST_DAYS",
    "WEATHER_LOCATION",
];

fn payload() -> serde_json::Value {
    serde_json::json!({
        "current": {
            "temperature_2m": 20,
            "weathercode": 0,
            "wind_speed_10m": 11.2,
            "relative_humidity_2m": 50
        },
        "daily": {
            "time": ["2026-10-14", "2026-10-15"],
            "weathercode": [0, 3],
            "temperature_2m_max": [23.4, 19.0],
            "temperature_2m_min": [12.1, 11.5],
            "sunrise": ["2026-10-14T06:58", "2026-10-15T07:00"],
            "sunset": ["2026-10-14T18:21", "2026-10-15T18:19"]
        }
    })
}

/// Run the binary with a clean WEATHER_* environment and the given env file.
fn run(server: &MockServer, env_file: &str) -> Output {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(env_file.as_bytes()).expect("write env file");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hyde-weather"));
    for var in WEATHER_VARS {
        cmd.env_remove(var);
    }
    cmd.env("RUST_LOG", "debug")
        .arg("--env-file")
        .arg(file.path())
        .arg("--endpoint")
        .arg(format!("{}/v1/forecast", server.uri()))
        .output()
        .expect("binary should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("utf-8 stdout");
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout:?}");
    serde_json::from_str(stdout.trim_end()).expect("stdout is JSON")
}

#[tokio::test(flavor = "multi_thread")]
async fn prints_one_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "40.7128"))
        .and(query_param("longitude", "-74.006"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload()))
        .mount(&server)
        .await;

    let output = run(
        &server,
        "export WEATHER_LOCATION=\"40.7128,-74.006\"\nWEATHER_FORECAST_DAYS=5\n",
    );

    assert!(output.status.success(), "{output:?}");
    let json = stdout_json(&output);
    assert_eq!(json["text"], "\u{2600}\u{fe0f} 20°C | Paris, FR");

    let tooltip = json["tooltip"].as_str().expect("tooltip string");
    assert!(tooltip.starts_with("<b>Clear sky 20°C</b>\nFeels like: 20.0°C\n"));
    assert!(tooltip.contains("<b>Day 2 (2026-10-15)</b>"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("resolved configuration"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn http_failure_exits_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let output = run(&server, "");

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["text"], "\u{2753} Weather Error");
    assert_eq!(json["tooltip"], "Failed to get weather data: HTTP 404 Not Found");
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_payload_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"current": {}})))
        .mount(&server)
        .await;

    let output = run(&server, "WEATHER_TEMPERATURE_UNIT=f\n");

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["text"], "\u{2753} Processing Error");
    assert!(json["tooltip"].as_str().unwrap().starts_with("Failed to process weather data: "));
}

#[tokio::test(flavor = "multi_thread")]
async fn slow_server_within_timeout_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(100))
                .set_body_json(payload()),
        )
        .mount(&server)
        .await;

    let output = run(&server, "WEATHER_SHOW_ICON=no\nWEATHER_SHOW_LOCATION=0\n");

    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout_json(&output)["text"], "20°C");
}
