//! Wire-order tests for the forwarding catalogue
//!
//! Every assertion here pins the exact positional parameter list an
//! operation places on the wire, including the operations whose wire order
//! differs from their method signature and the nil placeholders for omitted
//! optionals.

mod shared;

use printadm_client::ServerSession;
use printadm_core::xmlrpc::Value;
use shared::recording_stub;

fn nil() -> Value {
    Value::Nil
}

fn s(text: &str) -> Value {
    Value::String(text.to_string())
}

#[test]
fn balance_adjustment_with_defaults_forwards_nils_in_wire_order() {
    let (log, stub) = recording_stub();
    let mut session = ServerSession::with_transport(Box::new(stub));

    let result = session
        .adjust_user_account_balance("tok", "jsmith", -1.25, None, None)
        .unwrap();
    // the stub's canned boolean comes back unchanged
    assert_eq!(result, Value::Bool(true));

    let log = log.lock().unwrap();
    let (method, params) = &log.calls[0];
    assert_eq!(method, "api.adjustUserAccountBalance");
    assert_eq!(
        params,
        &vec![s("tok"), s("jsmith"), Value::Double(-1.25), nil(), nil()]
    );
}

#[test]
fn balance_adjustment_reorders_comment_before_account_name() {
    let (log, stub) = recording_stub();
    let mut session = ServerSession::with_transport(Box::new(stub));

    session
        .adjust_user_account_balance("tok", "jsmith", 5.0, Some("art-dept"), Some("topup"))
        .unwrap();

    let log = log.lock().unwrap();
    let (_, params) = &log.calls[0];
    // signature order is (.., account_name, comment); wire order swaps them
    assert_eq!(
        params,
        &vec![
            s("tok"),
            s("jsmith"),
            Value::Double(5.0),
            s("topup"),
            s("art-dept"),
        ]
    );
}

#[test]
fn group_adjustment_moves_account_name_to_front() {
    let (log, stub) = recording_stub();
    let mut session = ServerSession::with_transport(Box::new(stub));

    session
        .adjust_user_account_balance_by_group("tok", "students", 2.5, None, Some("weekly"))
        .unwrap();

    let log = log.lock().unwrap();
    let (method, params) = &log.calls[0];
    assert_eq!(method, "api.adjustUserAccountBalanceByGroup");
    assert_eq!(
        params,
        &vec![s("tok"), nil(), s("students"), Value::Double(2.5), s("weekly")]
    );
}

#[test]
fn group_adjustment_up_to_swaps_group_and_comment() {
    let (log, stub) = recording_stub();
    let mut session = ServerSession::with_transport(Box::new(stub));

    session
        .adjust_user_account_balance_by_group_up_to(
            "tok",
            None,
            1.0,
            Some("drip feed"),
            "students",
            1000,
        )
        .unwrap();

    let log = log.lock().unwrap();
    let (_, params) = &log.calls[0];
    assert_eq!(
        params,
        &vec![
            s("tok"),
            nil(),
            Value::Double(1.0),
            s("students"),
            s("drip feed"),
            Value::Int(1000),
        ]
    );
}

#[test]
fn group_quota_places_period_before_max_accumulation() {
    let (log, stub) = recording_stub();
    let mut session = ServerSession::with_transport(Box::new(stub));

    session
        .set_group_quota("tok", "students", 10.0, 50.0, "WEEKLY")
        .unwrap();

    let log = log.lock().unwrap();
    let (method, params) = &log.calls[0];
    assert_eq!(method, "api.setGroupQuota");
    assert_eq!(
        params,
        &vec![
            s("tok"),
            s("students"),
            Value::Double(10.0),
            s("WEEKLY"),
            Value::Double(50.0),
        ]
    );
}

#[test]
fn printer_property_setter_reorders_all_four_parameters() {
    let (log, stub) = recording_stub();
    let mut session = ServerSession::with_transport(Box::new(stub));

    session
        .set_printer_property("tok", "printsrv", "Library Laser", "cost-model", "SIMPLE")
        .unwrap();

    let log = log.lock().unwrap();
    let (method, params) = &log.calls[0];
    assert_eq!(method, "api.setPrinterProperty");
    assert_eq!(
        params,
        &vec![
            s("tok"),
            s("cost-model"),
            s("SIMPLE"),
            s("printsrv"),
            s("Library Laser"),
        ]
    );
}

#[test]
fn internal_user_creation_keeps_fixed_arity() {
    let (log, stub) = recording_stub();
    let mut session = ServerSession::with_transport(Box::new(stub));

    session
        .add_new_internal_user("tok", "jsmith", "hunter2", None, None, None, None)
        .unwrap();

    let log = log.lock().unwrap();
    let (_, params) = &log.calls[0];
    assert_eq!(params.len(), 7);
    assert_eq!(&params[..3], &[s("tok"), s("jsmith"), s("hunter2")]);
    assert!(params[3..].iter().all(Value::is_nil));
}

#[test]
fn undocumented_enum_values_pass_through_unvalidated() {
    let (log, stub) = recording_stub();
    let mut session = ServerSession::with_transport(Box::new(stub));

    // not a documented overdraft mode; validation belongs to the server
    session
        .set_user_overdraft_mode("tok", "jsmith", "sideways")
        .unwrap();
    session
        .set_shared_account_overdraft_mode("tok", "art-dept", "uncharted")
        .unwrap();

    let log = log.lock().unwrap();
    assert_eq!(log.calls[0].1[2], s("sideways"));
    assert_eq!(log.calls[1].1[2], s("uncharted"));
}

#[test]
fn list_and_lookup_operations_marshal_scalars() {
    let (log, stub) = recording_stub();
    let mut session = ServerSession::with_transport(Box::new(stub));

    session.list_user_accounts("tok", 2000, 1000).unwrap();
    session.look_up_user_name_by_id_no("tok", 4711).unwrap();
    session.disable_printer("tok", "printsrv", "Lobby", -1).unwrap();

    let log = log.lock().unwrap();
    assert_eq!(
        log.calls[0],
        (
            "api.listUserAccounts".to_string(),
            vec![s("tok"), Value::Int(2000), Value::Int(1000)]
        )
    );
    assert_eq!(
        log.calls[1],
        (
            "api.lookUpUserNameByIDNo".to_string(),
            vec![s("tok"), Value::Int(4711)]
        )
    );
    assert_eq!(
        log.calls[2],
        (
            "api.disablePrinter".to_string(),
            vec![s("tok"), s("printsrv"), s("Lobby"), Value::Int(-1)]
        )
    );
}

#[test]
fn list_parameters_marshal_as_arrays() {
    let (log, stub) = recording_stub();
    let mut session = ServerSession::with_transport(Box::new(stub));

    session
        .run_command("tok", "list-user-accounts", &["-v", "--all"])
        .unwrap();
    session
        .set_user_properties("tok", "jsmith", &[("balance", "1.20"), ("office", "East Wing")])
        .unwrap();

    let log = log.lock().unwrap();
    assert_eq!(
        log.calls[0].1[2],
        Value::Array(vec![s("-v"), s("--all")])
    );
    assert_eq!(
        log.calls[1].1[2],
        Value::Array(vec![
            Value::Array(vec![s("balance"), s("1.20")]),
            Value::Array(vec![s("office"), s("East Wing")]),
        ])
    );
}

#[test]
fn every_call_leads_with_the_auth_token() {
    let (log, stub) = recording_stub();
    let mut session = ServerSession::with_transport(Box::new(stub));

    session.get_total_users("tok").unwrap();
    session.perform_group_sync("tok").unwrap();
    session.get_task_status("tok").unwrap();
    session.is_user_exists("tok", "jsmith").unwrap();
    session.get_user_account_balance("tok", "jsmith", None).unwrap();

    let log = log.lock().unwrap();
    assert_eq!(log.calls.len(), 5);
    for (method, params) in &log.calls {
        assert!(method.starts_with("api."), "method {} lacks namespace", method);
        assert_eq!(params[0], s("tok"));
    }
}
