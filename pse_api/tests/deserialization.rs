use pse_api::types::{CrbProgRow, ODataResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_crb_prog_full() {
    let json = load_fixture("crb_prog.json");
    let resp: ODataResponse<CrbProgRow> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.value.len(), 3);

    let first = &resp.value[0];
    assert_eq!(first.business_date, "2024-06-01");
    assert_eq!(first.cen_prog, 412.37);
    assert_eq!(first.udtczas_oreb, "12:45 - 13:00");

    let last = &resp.value[2];
    assert_eq!(last.cen_prog, -12.5);
    assert_eq!(last.udtczas_oreb, "13:15 - 13:30");
}

#[test]
fn deserialize_crb_prog_empty() {
    let json = load_fixture("crb_prog_empty.json");
    let resp: ODataResponse<CrbProgRow> = serde_json::from_str(&json).unwrap();
    assert!(resp.value.is_empty());
}

#[test]
fn missing_value_key_is_no_rows() {
    let resp: ODataResponse<CrbProgRow> = serde_json::from_str("{}").unwrap();
    assert!(resp.value.is_empty());
}

#[test]
fn extra_columns_are_ignored() {
    let json = r#"{"value":[{"business_date":"2024-06-01","cen_prog":0,"udtczas_oreb":"00:00 - 00:15","dtime":"2024-06-01 00:15:00","source_datetime":"x"}]}"#;
    let resp: ODataResponse<CrbProgRow> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.value[0].cen_prog, 0.0);
}

#[test]
fn non_numeric_price_is_rejected() {
    let json = r#"{"value":[{"business_date":"2024-06-01","cen_prog":"abc","udtczas_oreb":"00:00 - 00:15"}]}"#;
    let resp: Result<ODataResponse<CrbProgRow>, _> = serde_json::from_str(json);
    assert!(resp.is_err());
}
