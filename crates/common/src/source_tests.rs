// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use rstest::rstest;
use std::io::ErrorKind;
use tempfile::TempDir;

#[test]
fn read_bytes_returns_exact_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.bin");
    std::fs::write(&path, [0u8, 65, 255, 10]).unwrap();

    assert_eq!(read_bytes(&path).unwrap(), vec![0u8, 65, 255, 10]);
}

#[test]
fn read_text_returns_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "foo\nbar\n").unwrap();

    assert_eq!(read_text(&path).unwrap(), "foo\nbar\n");
}

#[rstest]
#[case::bytes(true)]
#[case::text(false)]
fn missing_file_reports_path(#[case] as_bytes: bool) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");

    let err = if as_bytes {
        read_bytes(&path).unwrap_err()
    } else {
        read_text(&path).unwrap_err()
    };

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("missing.txt"), "{}", err);
}

#[test]
fn invalid_utf8_is_invalid_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.txt");
    std::fs::write(&path, [0x66u8, 0x6f, 0xe9, 0x0a]).unwrap();

    let err = read_text(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn directory_is_not_readable() {
    let dir = TempDir::new().unwrap();
    assert!(read_bytes(dir.path()).is_err());
}
