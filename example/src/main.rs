use std::collections::HashMap;

use example_app::generated::{Point, Stroke};
use stproto::{decode_from_slice, encode_to_vec, ProtoError};

fn main() -> Result<(), ProtoError> {
    let mut meta = HashMap::new();
    meta.insert("author".to_string(), "demo".to_string());

    let mut anchors = HashMap::new();
    anchors.insert(0, Point { x: 4, y: 4 });

    let stroke = Stroke {
        id: 42,
        label: "outline".to_string(),
        origin: Point { x: 1, y: 2 },
        points: vec![Point { x: 3, y: 4 }, Point { x: 5, y: 6 }],
        width: 2.5,
        opacity: 0.75,
        closed: true,
        tag: 7,
        mask: vec![0xDE, 0xAD],
        grid: vec![vec![1, 2], vec![3]],
        meta,
        anchors,
    };

    let bytes = encode_to_vec(&stroke);
    println!("encoded stroke into {} bytes", bytes.len());

    let decoded: Stroke = decode_from_slice(&bytes)?;
    assert_eq!(decoded, stroke);

    match serde_json::to_string_pretty(&decoded) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("json error: {}", err),
    }

    Ok(())
}
