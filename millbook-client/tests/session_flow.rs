// millbook-client/tests/session_flow.rs
// Offline form-session tests: staging, validation, roll-over.

use millbook_client::{ClientConfig, ClientError, ProductionSession, SaleSession, ValidationError};
use shared::models::{Item, Machine, MasterCreate, Operator, OperatorCreate, Party, UserCreate};

fn operators() -> Vec<Operator> {
    vec![Operator {
        id: 1,
        name: "R. Patel".into(),
        mobile: "9000000001".into(),
        address: "Unit 4".into(),
        created_at: None,
    }]
}

fn machines() -> Vec<Machine> {
    vec![
        Machine {
            id: 1,
            name: "Extruder 1".into(),
            remarks: String::new(),
            created_at: None,
        },
        Machine {
            id: 2,
            name: "Extruder 2".into(),
            remarks: String::new(),
            created_at: None,
        },
    ]
}

fn items() -> Vec<Item> {
    vec![
        Item {
            id: 10,
            name: "HDPE Pipe".into(),
            kind: "Finished".into(),
            created_at: None,
        },
        Item {
            id: 11,
            name: "PVC Pipe".into(),
            kind: "Finished".into(),
            created_at: None,
        },
    ]
}

fn parties() -> Vec<Party> {
    vec![Party {
        id: 5,
        name: "Sharma Traders".into(),
        mobile: "9000000002".into(),
        address: "Market Rd".into(),
        created_at: None,
    }]
}

fn production_session() -> ProductionSession {
    ProductionSession::new("DP001", "2024-03-11", operators(), machines(), items())
}

fn sale_session() -> SaleSession {
    SaleSession::new("JOB001", "2024-03-11", parties(), items())
}

#[test]
fn test_add_without_machine_is_rejected_and_buffer_unchanged() {
    let mut session = production_session();
    session.select_item(Some(10));
    session.set_length("120");

    assert_eq!(session.staged().len(), 0);
    let err = session.add_item().unwrap_err();
    assert_eq!(err, ValidationError::ItemAndMachineRequired);
    assert_eq!(session.staged().len(), 0);
}

#[test]
fn test_buffer_length_tracks_successful_adds() {
    let mut session = production_session();
    session.select_item(Some(10));
    session.select_machine(Some(1));

    for _ in 0..3 {
        session.add_item().unwrap();
    }
    assert_eq!(session.staged().len(), 3);

    // Rows come back in insertion order with recomputed indices.
    let indices: Vec<usize> = session.rows().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_add_snapshots_names_and_parses_inputs() {
    let mut session = production_session();
    session.select_item(Some(11));
    session.select_machine(Some(2));
    session.set_length("120.5");
    session.set_weight("not a number");
    session.set_remarks("night batch");

    session.add_item().unwrap();

    let staged = &session.staged()[0];
    assert_eq!(staged.item_name, "PVC Pipe");
    assert_eq!(staged.machine_name, "Extruder 2");
    assert_eq!(staged.length, 120.5);
    assert_eq!(staged.weight, 0.0);
    assert_eq!(staged.remarks, "night batch");

    // Transient inputs cleared, selections kept.
    assert_eq!(session.inputs().length, "");
    assert_eq!(session.inputs().weight, "");
    assert_eq!(session.inputs().remarks, "");
    session.add_item().unwrap();
    assert_eq!(session.staged().len(), 2);
}

#[test]
fn test_remove_first_item_shifts_second_to_front() {
    let mut session = production_session();
    session.select_item(Some(10));
    session.select_machine(Some(1));
    session.set_length("100");
    session.add_item().unwrap();

    session.select_item(Some(11));
    session.set_length("200");
    session.add_item().unwrap();

    session.remove_item(0);

    let rows: Vec<_> = session.rows().collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].index, 0);
    assert_eq!(rows[0].item.item_name, "PVC Pipe");
    assert_eq!(rows[0].item.length, 200.0);
}

#[test]
fn test_sale_amount_recomputes_on_quantity_and_rate() {
    let mut session = sale_session();
    session.set_quantity("3");
    session.set_rate("12.5");
    assert_eq!(session.inputs().amount, "37.50");

    session.set_quantity("0");
    assert_eq!(session.inputs().amount, "0.00");
}

#[test]
fn test_sale_amount_manual_override_survives_add() {
    let mut session = sale_session();
    session.select_item(Some(10));
    session.set_quantity("3");
    session.set_rate("12.5");
    session.set_amount("35.00");

    session.add_item().unwrap();

    let staged = &session.staged()[0];
    assert_eq!(staged.quantity, 3.0);
    assert_eq!(staged.rate, 12.5);
    assert_eq!(staged.amount, 35.0);
}

#[test]
fn test_sale_add_requires_item_selection() {
    let mut session = sale_session();
    session.set_quantity("2");
    session.set_rate("5");

    let err = session.add_item().unwrap_err();
    assert_eq!(err, ValidationError::ItemRequired);
    assert!(session.staged().is_empty());
}

#[test]
fn test_payload_requires_items_then_party() {
    let mut session = sale_session();
    assert_eq!(session.payload().unwrap_err(), ValidationError::NoSaleItems);

    session.select_item(Some(10));
    session.add_item().unwrap();
    assert_eq!(session.payload().unwrap_err(), ValidationError::PartyRequired);

    session.select_party(Some(5));
    let save = session.payload().unwrap();
    assert_eq!(save.order_no, "JOB001");
    assert_eq!(save.party_id, 5);
    assert_eq!(save.items.len(), 1);
}

#[tokio::test]
async fn test_submit_validation_fails_before_any_request() {
    // No server is running; a local validation failure must short-circuit
    // and leave the form untouched.
    let client = ClientConfig::default().build_http_client();

    let mut session = production_session();
    let err = session.submit(&client).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Validation(ValidationError::NoProductionItems)
    ));

    session.select_item(Some(10));
    session.select_machine(Some(1));
    session.add_item().unwrap();

    let err = session.submit(&client).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Validation(ValidationError::OperatorRequired)
    ));
    assert_eq!(session.staged().len(), 1);
    assert_eq!(session.number(), "DP001");
}

#[test]
fn test_roll_over_clears_form_and_advances_number() {
    let mut session = production_session();
    session.select_operator(Some(1));
    session.select_item(Some(10));
    session.select_machine(Some(1));
    session.set_shift("Day");
    session.add_item().unwrap();

    session.roll_over();

    assert!(session.staged().is_empty());
    assert_eq!(session.number(), "DP002");
    assert!(session.payload().is_err());

    let mut sale = sale_session();
    sale.select_item(Some(10));
    sale.add_item().unwrap();
    sale.roll_over();
    assert_eq!(sale.order_no(), "JOB002");
    assert!(sale.staged().is_empty());
}

#[tokio::test]
async fn test_add_master_requires_name_before_sending() {
    let client = ClientConfig::default().build_http_client();

    let err = client
        .add_master(&MasterCreate::Operator(OperatorCreate {
            name: "  ".into(),
            mobile: String::new(),
            address: String::new(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Operator name is required");
}

#[tokio::test]
async fn test_add_user_requires_credentials_before_sending() {
    let client = ClientConfig::default().build_http_client();

    let err = client
        .add_user(&UserCreate {
            username: "clerk".into(),
            password: String::new(),
            role: Default::default(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Validation(ValidationError::CredentialsRequired)
    ));
}

#[test]
fn test_client_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:5000");
    assert_eq!(config.timeout, 30);
    assert!(config.token.is_none());

    let client = config.with_token("session-token").build_http_client();
    assert_eq!(client.token(), Some("session-token"));
}
