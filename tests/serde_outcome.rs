//! Round trips for the `serde` feature (run with `--features serde`)
#![cfg(feature = "serde")]

use outcome::Outcome;

#[test]
fn ok_round_trips_externally_tagged() {
    let ok: Outcome<u32, String> = Outcome::Ok(2);

    let json = serde_json::to_string(&ok).unwrap();
    assert_eq!(json, r#"{"Ok":2}"#);
    assert_eq!(serde_json::from_str::<Outcome<u32, String>>(&json).unwrap(), ok);
}

#[test]
fn err_round_trips_externally_tagged() {
    let err: Outcome<u32, String> = Outcome::Err("bad input".to_string());

    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"Err":"bad input"}"#);
    assert_eq!(serde_json::from_str::<Outcome<u32, String>>(&json).unwrap(), err);
}
