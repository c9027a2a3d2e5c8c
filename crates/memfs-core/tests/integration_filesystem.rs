//! End-to-end tests over the whole store: path algebra, tree
//! operations and channels working together on one filesystem
//! instance.

use memfs_core::{FsError, MemoryFs, TransferOptions};

fn write_all(fs: &MemoryFs, path: &str, bytes: &[u8]) {
    let path = fs.path(path).unwrap();
    let channel = fs.open_write(&path, false).unwrap();
    assert_eq!(channel.write(bytes).unwrap(), bytes.len());
    channel.close();
}

fn read_all(fs: &MemoryFs, path: &str) -> Vec<u8> {
    let path = fs.path(path).unwrap();
    let channel = fs.open_read(&path).unwrap();
    let mut out = Vec::new();
    let mut chunk = [0u8; 64];
    while let Some(read) = channel.read(&mut chunk).unwrap() {
        out.extend_from_slice(&chunk[..read]);
    }
    channel.close();
    out
}

#[test]
fn write_then_read_round_trip() {
    let fs = MemoryFs::new("rw");
    fs.create_directories(&fs.path("/logs/app").unwrap()).unwrap();
    write_all(&fs, "/logs/app/today", b"first line\nsecond line\n");
    assert_eq!(read_all(&fs, "/logs/app/today"), b"first line\nsecond line\n");
}

#[test]
fn nested_directory_traversal_matches_creation_order() {
    let fs = MemoryFs::new("tree");
    let root = fs.root_path();
    let ab = root.resolve_str("a/b").unwrap();
    let cd = root.resolve_str("c/d").unwrap();
    fs.create_directories(&ab).unwrap();
    fs.create_directories(&cd).unwrap();

    let top: Vec<String> = fs
        .directory_stream(&root)
        .unwrap()
        .map(|p| p.to_string())
        .collect();
    assert_eq!(top, ["/a", "/c"]);

    for (dir, expected) in [("/a", "/a/b"), ("/c", "/c/d")] {
        let children: Vec<String> = fs
            .directory_stream(&fs.path(dir).unwrap())
            .unwrap()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(children, [expected], "{dir}");
    }
}

#[test]
fn move_keeps_file_content() {
    let fs = MemoryFs::new("mv");
    fs.create_directory(&fs.path("/in").unwrap()).unwrap();
    fs.create_directory(&fs.path("/out").unwrap()).unwrap();
    write_all(&fs, "/in/payload", b"payload bytes");

    fs.move_entry(
        &fs.path("/in/payload").unwrap(),
        &fs.path("/out/payload").unwrap(),
        TransferOptions::default(),
    )
    .unwrap();

    assert!(!fs.exists(&fs.path("/in/payload").unwrap()).unwrap());
    assert_eq!(read_all(&fs, "/out/payload"), b"payload bytes");
}

#[test]
fn copy_and_source_diverge_after_writes() {
    let fs = MemoryFs::new("cp");
    write_all(&fs, "/original", b"shared");
    fs.copy_entry(
        &fs.path("/original").unwrap(),
        &fs.path("/copy").unwrap(),
        TransferOptions::default(),
    )
    .unwrap();

    write_all(&fs, "/copy", b"rewritten");
    assert_eq!(read_all(&fs, "/original"), b"shared");
    assert_eq!(read_all(&fs, "/copy"), b"rewritten");
}

#[test]
fn channels_over_one_file_share_the_buffer() {
    let fs = MemoryFs::new("shared");
    write_all(&fs, "/data", b"abc");

    let path = fs.path("/data").unwrap();
    let appender = fs.open_write(&path, true).unwrap();
    appender.write(b"def").unwrap();

    // a reader opened afterwards sees the appended bytes
    assert_eq!(read_all(&fs, "/data"), b"abcdef");
    appender.close();
}

#[test]
fn attribute_views_track_content_size() {
    let fs = MemoryFs::new("attrs");
    write_all(&fs, "/sized", b"123456");
    let attrs = fs.attributes(&fs.path("/sized").unwrap()).unwrap();
    assert!(attrs.is_regular_file());
    assert_eq!(attrs.size(), 6);

    fs.create_directory(&fs.path("/dir").unwrap()).unwrap();
    let attrs = fs.attributes(&fs.path("/dir").unwrap()).unwrap();
    assert!(attrs.is_directory());
    assert_eq!(attrs.size(), 0, "directory size is always 0");
}

#[test]
fn errors_surface_with_paths() {
    let fs = MemoryFs::new("errors");
    let err = fs.attributes(&fs.path("/nope").unwrap()).unwrap_err();
    assert_eq!(err, FsError::NotFound {
        path: "/nope".to_string(),
    });
    assert_eq!(err.to_string(), "no such entry: /nope");
}

#[test]
fn deep_paths_resolve_segment_by_segment() {
    let fs = MemoryFs::new("deep");
    let deep = fs.path("/a/b/c/d/e").unwrap();
    fs.create_directories(&deep).unwrap();

    // every prefix resolves to a directory
    let mut prefix = fs.root_path();
    for segment in deep.segments() {
        prefix = prefix.resolve_str(segment).unwrap();
        assert!(fs.attributes(&prefix).unwrap().is_directory(), "{prefix}");
    }

    // a file is never a path intermediate
    write_all(&fs, "/a/b/c/d/e/f", b"x");
    assert!(!fs.exists(&fs.path("/a/b/c/d/e/f/g").unwrap()).unwrap());
}
