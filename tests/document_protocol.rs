use wordfreq_core::document::{Document, Generation, ReadHandle, ReadOutcome};
use wordfreq_core::types::{ReportVersion, TransferError};

const BIG: usize = 4096;

fn read_all(doc: &Document, handle: &mut ReadHandle) -> Vec<u8> {
    doc.read(handle, BIG).unwrap().as_bytes().to_vec()
}

#[test]
fn fresh_document_is_empty() {
    let doc = Document::new();
    assert!(doc.is_empty());
    assert_eq!(doc.generation(), Generation::EMPTY);
    assert_eq!(doc.version(), ReportVersion::from_report(b""));

    let mut handle = ReadHandle::new();
    let outcome = doc.read(&mut handle, BIG).unwrap();
    assert_eq!(outcome, ReadOutcome::Delivered(Vec::<u8>::new().into()));
    assert!(handle.is_exhausted());
}

#[test]
fn write_returns_input_length() {
    let doc = Document::new();
    assert_eq!(doc.write(b"the cat sat on the mat").unwrap(), 22);
    assert_eq!(doc.write(b"").unwrap(), 0);
    assert_eq!(doc.write(b"##$$").unwrap(), 4);
}

#[test]
fn scenario_sentence() {
    let doc = Document::new();
    doc.write(b"the cat sat on the mat").unwrap();

    let mut handle = ReadHandle::new();
    assert_eq!(
        read_all(&doc, &mut handle),
        b"cat 1\nmat 1\non 1\nsat 1\nthe 2\n".to_vec()
    );
}

#[test]
fn scenario_empty_write() {
    let doc = Document::new();
    doc.write(b"").unwrap();
    assert!(!doc.is_empty());

    let mut handle = ReadHandle::new();
    assert!(read_all(&doc, &mut handle).is_empty());
}

#[test]
fn scenario_reread_is_end_of_stream() {
    let doc = Document::new();
    doc.write(b"x").unwrap();

    let mut handle = ReadHandle::new();
    assert_eq!(read_all(&doc, &mut handle), b"x 1\n".to_vec());
    assert_eq!(handle.offset(), 4);

    let second = doc.read(&mut handle, BIG).unwrap();
    assert!(second.is_end_of_stream());
    assert!(second.is_empty());
}

#[test]
fn end_of_stream_survives_new_write() {
    let doc = Document::new();
    doc.write(b"first").unwrap();

    let mut handle = ReadHandle::new();
    read_all(&doc, &mut handle);

    doc.write(b"second").unwrap();
    assert!(doc.read(&mut handle, BIG).unwrap().is_end_of_stream());

    handle.rewind();
    assert_eq!(read_all(&doc, &mut handle), b"second 1\n".to_vec());
}

#[test]
fn nonzero_offset_is_end_of_stream() {
    let doc = Document::new();
    doc.write(b"hello").unwrap();

    assert!(doc.read_at(1, BIG).unwrap().is_end_of_stream());
    assert!(doc.read_at(8, BIG).unwrap().is_end_of_stream());
    assert_eq!(doc.read_at(0, BIG).unwrap().as_bytes(), b"hello 1\n");
}

#[test]
fn small_destination_fails_without_advancing() {
    let doc = Document::new();
    doc.write(b"hello").unwrap();

    let mut handle = ReadHandle::new();
    let err = doc.read(&mut handle, 3).unwrap_err();
    assert_eq!(
        err,
        TransferError::DestinationTooSmall {
            required: 8,
            available: 3
        }
    );
    assert!(!handle.is_exhausted());
    assert_eq!(handle.offset(), 0);

    // Exact fit succeeds on retry
    assert_eq!(doc.read(&mut handle, 8).unwrap().as_bytes(), b"hello 1\n");
}

#[test]
fn overwrite_replaces_not_merges() {
    let doc = Document::new();
    doc.write(b"alpha beta alpha").unwrap();
    doc.write(b"beta gamma").unwrap();

    let mut handle = ReadHandle::new();
    assert_eq!(read_all(&doc, &mut handle), b"beta 1\ngamma 1\n".to_vec());
}

#[test]
fn generation_advances_per_write() {
    let doc = Document::new();
    doc.write(b"a").unwrap();
    doc.write(b"a").unwrap();
    assert_eq!(doc.generation().get(), 2);
}

#[test]
fn snapshot_describes_current_report() {
    let doc = Document::new();
    let empty = doc.snapshot();
    assert!(empty.report.is_empty());
    assert_eq!(empty.metadata.generation, Generation::EMPTY);
    assert!(empty.metadata.written_at.is_none());

    doc.write(b"the cat sat on the mat").unwrap();
    let snap = doc.snapshot();
    assert_eq!(snap.metadata.generation.get(), 1);
    assert_eq!(snap.metadata.unique_words, 5);
    assert_eq!(snap.metadata.total_words, 6);
    assert_eq!(snap.metadata.byte_len, snap.report.len());
    assert_eq!(snap.metadata.version, ReportVersion::from_report(&snap.report));
    assert!(snap.metadata.written_at.is_some());
}

#[test]
fn golden_metadata_serialization_order() {
    let doc = Document::new();
    doc.write(b"x").unwrap();
    let json = serde_json::to_string(&doc.snapshot().metadata).unwrap();

    let keys = [
        "\"generation\":",
        "\"version\":",
        "\"unique_words\":",
        "\"total_words\":",
        "\"byte_len\":",
        "\"written_at\":",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    assert!(json.contains("\"generation\":1"));
    assert!(json.contains("\"byte_len\":4"));
}

#[test]
fn empty_document_reads_share_one_buffer() {
    let doc = Document::new();
    let first = doc.read_at(0, BIG).unwrap();
    let second = doc.read_at(0, BIG).unwrap();

    match (first, second) {
        (ReadOutcome::Delivered(a), ReadOutcome::Delivered(b)) => {
            assert!(a.is_empty());
            assert!(std::sync::Arc::ptr_eq(&a, &b));
            assert!(std::sync::Arc::ptr_eq(&a, &doc.snapshot().report));
        }
        other => panic!("expected two deliveries, got {other:?}"),
    }
}
