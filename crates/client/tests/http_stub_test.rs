//! End-to-end tests against a canned-response HTTP stub
//!
//! These drive the real blocking HTTP transport and XML-RPC codec against a
//! minimal in-process HTTP server, verifying what actually goes over the
//! wire and how real server answers come back.

use printadm_client::{ClientError, ServerProxy};
use printadm_core::config::ServerConfig;
use printadm_core::xmlrpc::Value;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread;

/// Accept one HTTP request, answer it with `response_body`, and hand back
/// the request line and body that were received.
fn serve_one(listener: TcpListener, response_body: String) -> thread::JoinHandle<(String, String)> {
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0usize;
        let mut line = String::new();
        loop {
            line.clear();
            reader.read_line(&mut line).unwrap();
            let header = line.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some(value) = header.to_ascii_lowercase().strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap();
            }
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).unwrap();

        let mut stream = reader.into_inner();
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response_body.len(),
            response_body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        (request_line.trim_end().to_string(), String::from_utf8(body).unwrap())
    })
}

fn local_config(port: u16) -> ServerConfig {
    ServerConfig {
        timeout: Some(10),
        ..ServerConfig::new("127.0.0.1", port)
    }
}

#[test]
fn posts_to_the_rpc_path_and_returns_the_result_unchanged() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = serve_one(
        listener,
        "<?xml version=\"1.0\"?><methodResponse><params><param>\
         <value><int>274</int></value>\
         </param></params></methodResponse>"
            .to_string(),
    );

    let proxy = ServerProxy::new(local_config(port));
    let mut session = proxy.connect().unwrap();
    let total = session.get_total_users("tok").unwrap();
    assert_eq!(total, Value::Int(274));

    let (request_line, body) = server.join().unwrap();
    assert!(
        request_line.starts_with("POST /rpc/api/xmlrpc"),
        "unexpected request line: {}",
        request_line
    );
    assert!(body.contains("<methodName>api.getTotalUsers</methodName>"));
    assert!(body.contains("<value><string>tok</string></value>"));
}

#[test]
fn nil_parameters_reach_the_wire() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = serve_one(
        listener,
        "<methodResponse><params><param><value><boolean>1</boolean></value></param></params></methodResponse>"
            .to_string(),
    );

    let proxy = ServerProxy::new(local_config(port));
    let mut session = proxy.connect().unwrap();
    let result = session
        .adjust_user_account_balance("tok", "jsmith", -1.25, None, None)
        .unwrap();
    assert_eq!(result, Value::Bool(true));

    let (_, body) = server.join().unwrap();
    assert!(body.contains("<double>-1.25</double>"));
    assert_eq!(body.matches("<value><nil/></value>").count(), 2);
}

#[test]
fn server_faults_surface_verbatim() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = serve_one(
        listener,
        "<methodResponse><fault><value><struct>\
         <member><name>faultCode</name><value><int>262</int></value></member>\
         <member><name>faultString</name><value><string>Invalid authentication token</string></value></member>\
         </struct></value></fault></methodResponse>"
            .to_string(),
    );

    let proxy = ServerProxy::new(local_config(port));
    let mut session = proxy.connect().unwrap();
    let err = session.get_total_users("bad-token").unwrap_err();
    match err {
        ClientError::Fault(fault) => {
            assert_eq!(fault.code, 262);
            assert_eq!(fault.message, "Invalid authentication token");
        }
        other => panic!("expected a fault, got {:?}", other),
    }

    server.join().unwrap();
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // a listener that is bound and immediately dropped leaves a port with
    // nothing accepting on it
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let proxy = ServerProxy::new(local_config(port));
    let mut session = proxy.connect().unwrap();
    let err = session.get_total_users("tok").unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
