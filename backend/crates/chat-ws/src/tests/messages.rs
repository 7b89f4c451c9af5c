use crate::{ClientMessage, ServerMessage, WsError};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::json;

#[test]
fn given_register_username_json_when_parsed_then_client_message() {
    let parsed: ClientMessage =
        serde_json::from_str(r#"{"type":"register_username","username":"alice"}"#).unwrap();
    assert_eq!(
        parsed,
        ClientMessage::RegisterUsername {
            username: "alice".into()
        }
    );
    assert_eq!(parsed.kind(), "register_username");
}

#[test]
fn given_msg_json_when_parsed_then_client_message() {
    let parsed: ClientMessage = serde_json::from_str(r#"{"type":"msg","msg":"hi"}"#).unwrap();
    assert_eq!(parsed, ClientMessage::Msg { msg: "hi".into() });
}

#[test]
fn given_unknown_type_when_parsed_then_error() {
    let parsed = serde_json::from_str::<ClientMessage>(r#"{"type":"shout","msg":"hi"}"#);
    assert!(parsed.is_err());
}

#[test]
fn given_chat_message_when_serialized_then_wire_shape_matches() {
    let message = ServerMessage::Msg {
        timestamp: "12:34:56".into(),
        username: "alice".into(),
        msg: "hi".into(),
    };

    let value: serde_json::Value = serde_json::from_slice(&message.to_payload().unwrap()).unwrap();

    assert_eq!(
        value,
        json!({"type": "msg", "timestamp": "12:34:56", "username": "alice", "msg": "hi"})
    );
}

#[test]
fn given_roster_when_serialized_then_update_username_list() {
    let message = ServerMessage::roster(vec!["alice".into(), "bob".into()]);

    let value: serde_json::Value = serde_json::from_slice(&message.to_payload().unwrap()).unwrap();

    assert_eq!(
        value,
        json!({"type": "update_username_list", "username_list": ["alice", "bob"]})
    );
}

#[test]
fn given_chat_constructor_when_called_then_timestamp_is_clock_time() {
    let ServerMessage::Msg { timestamp, .. } = ServerMessage::chat("alice", "hi") else {
        panic!("chat() must build a msg envelope");
    };

    let parts: Vec<&str> = timestamp.split(':').collect();
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|part| part.len() == 2));
}

#[test]
fn given_ws_error_when_error_envelope_then_code_matches() {
    let error = WsError::Unregistered {
        location: ErrorLocation::from(Location::caller()),
    };

    let message = ServerMessage::error(&error);

    match message {
        ServerMessage::Error { code, .. } => assert_eq!(code, "UNREGISTERED"),
        other => panic!("unexpected envelope: {other:?}"),
    }
}
