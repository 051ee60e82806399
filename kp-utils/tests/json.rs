use kp_utils::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Sample {
    zeta: u32,
    alpha: Vec<u32>,
}

#[test]
fn test_jsonify_sorts_keys() {
    let sample = Sample {
        zeta: 1,
        alpha: vec![2, 3],
    };
    assert_eq!(jsonify(&sample), r#"{"alpha":[2,3],"zeta":1}"#);
}

#[test]
fn test_jsonify_sorts_nested_keys() {
    let value = json!({"b": [{"y": 1, "x": 2}], "a": {"d": 0, "c": 1}});
    assert_eq!(
        jsonify(&value),
        r#"{"a":{"c":1,"d":0},"b":[{"x":2,"y":1}]}"#
    );
}

#[test]
fn test_load_json_arg_reads_jsonify_output() {
    let sample = Sample {
        zeta: 7,
        alpha: vec![],
    };
    assert_eq!(load_json_arg::<Sample>(&jsonify(&sample)).unwrap(), sample);
}

#[test]
fn test_load_json_arg_inline() {
    let sample: Sample = load_json_arg(r#"{"zeta": 3, "alpha": [1]}"#).unwrap();
    assert_eq!(
        sample,
        Sample {
            zeta: 3,
            alpha: vec![1]
        }
    );
}

#[test]
fn test_load_json_arg_file() {
    let path = std::env::temp_dir().join(format!("kp_utils_{}.json", std::process::id()));
    std::fs::write(&path, r#"{"zeta": 9, "alpha": []}"#).unwrap();
    let sample: Sample = load_json_arg(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(sample.zeta, 9);
}

#[test]
fn test_load_json_arg_missing_file() {
    assert!(load_json_arg::<Sample>("/definitely/not/here.json").is_err());
}

#[test]
fn test_load_json_arg_malformed() {
    assert!(load_json_arg::<Sample>("{not json").is_err());
}
