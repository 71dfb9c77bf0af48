//! Generate → encode → decode pipeline tests.
//!
//! Each test drives a sample function through `advect_gen::generate`,
//! serializes with the codec, and checks what a renderer would see after
//! decoding.

use advect_codec::{decode, encode, load, save};
use advect_core::{
    cell_coords, cell_index, FieldError, Vector3, CELL_COUNT, FILE_SIZE, GRID_DIM,
};
use advect_gen::{generate, Preset, Sample};
use advect_test_utils::ramp_grid;
use smallvec::smallvec;

#[test]
fn zero_field_end_to_end() {
    let grid = generate(&|_: f64, _: f64| -> Sample { smallvec![0.0, 0.0] }).unwrap();
    let decoded = decode(&encode(&grid)).unwrap();
    assert_eq!(decoded.as_slice().len(), CELL_COUNT);
    assert!(decoded.iter().all(|v| *v == Vector3::ZERO));
}

#[test]
fn index_correspondence_survives_the_codec() {
    let grid = generate(&|x: f64, y: f64| -> Sample { smallvec![x, y, 0.0] }).unwrap();
    let bytes = encode(&grid);
    let decoded = decode(&bytes).unwrap();

    for row in 0..GRID_DIM {
        for col in 0..GRID_DIM {
            let k = cell_index(row, col);
            let v = decoded.as_slice()[k];
            assert_eq!(v.x, (row as f64 / 127.0) as f32, "x at record {k}");
            assert_eq!(v.y, (col as f64 / 127.0) as f32, "y at record {k}");
            assert_eq!(v.z, 0.0);
        }
    }
}

#[test]
fn records_are_row_major_column_fastest() {
    let bytes = encode(&ramp_grid());
    for (k, record) in bytes.chunks_exact(12).enumerate() {
        let (row, col) = cell_coords(k);
        let field = |i: usize| f32::from_le_bytes(record[i..i + 4].try_into().unwrap());
        assert_eq!(
            (field(0), field(4), field(8)),
            (row as f32, col as f32, k as f32),
            "record {k}"
        );
    }
    // Record 1 is the second column of the first row, not the second row.
    assert_eq!(&bytes[12..16], &0.0f32.to_le_bytes());
    assert_eq!(&bytes[16..20], &1.0f32.to_le_bytes());
    assert_eq!(decode(&bytes).unwrap(), ramp_grid());
}

#[test]
fn planar_samples_encode_zero_z() {
    let grid = generate(&|_: f64, _: f64| -> Sample { smallvec![1.0, 2.0] }).unwrap();
    let bytes = encode(&grid);
    for record in bytes.chunks_exact(12) {
        assert_eq!(&record[8..12], &0.0f32.to_le_bytes());
    }
}

#[test]
fn bad_arity_never_reaches_the_codec() {
    let result = generate(&|x: f64, _: f64| -> Sample {
        if x > 0.5 {
            smallvec![1.0]
        } else {
            smallvec![1.0, 1.0]
        }
    });
    match result {
        Err(FieldError::Arity { row, col, found }) => {
            // First row with x > 0.5 is 64 (64/127 ≈ 0.504).
            assert_eq!((row, col, found), (64, 0, 1));
        }
        other => panic!("expected Arity, got {other:?}"),
    }
}

#[test]
fn preset_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vortex.advect");

    let grid = generate(&Preset::Vortex).unwrap();
    save(&path, &grid).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), FILE_SIZE as u64);

    let loaded = load(&path).unwrap();
    assert_eq!(loaded, grid);
}

#[test]
fn oversized_file_loads_first_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("padded.advect");

    let grid = generate(&Preset::Saddle).unwrap();
    let mut bytes = encode(&grid);
    bytes.extend_from_slice(&[0x55; 100]);
    std::fs::write(&path, &bytes).unwrap();

    assert_eq!(load(&path).unwrap(), grid);
}
