//! Cross-accessor equivalence: memory-mapped access must agree with
//! file-backed access on every record, for lookup by k-mer and by index.

#![cfg(feature = "mmap")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::fs::File;

use cortex_graph::error::GraphError;
use cortex_graph::mmap_graph::MmapGraph;
use cortex_graph::random_access::RandomAccess;

use common::{build_graph, wire_edges, write_temp_graph};

fn fixture() -> tempfile::NamedTempFile {
    let bytes = build_graph(
        3,
        &[
            ("AAA", vec![1], vec![wire_edges("", "C")]),
            ("AAC", vec![1], vec![wire_edges("A", "A")]),
            ("AAG", vec![1], vec![wire_edges("C", "")]),
            ("ACA", vec![1], vec![wire_edges("A", "A")]),
            ("CAA", vec![1], vec![wire_edges("A", "G")]),
        ],
    );
    write_temp_graph(&bytes)
}

#[test]
fn mmap_reports_same_length_as_file_backed() {
    let file = fixture();
    let mmap_graph = MmapGraph::open(file.path()).unwrap();
    let ra = RandomAccess::open(File::open(file.path()).unwrap()).unwrap();

    assert_eq!(mmap_graph.len(), ra.len());
    assert!(!mmap_graph.is_empty());
}

#[test]
fn mmap_header_matches_file_backed_header() {
    let file = fixture();
    let mmap_graph = MmapGraph::open(file.path()).unwrap();
    let ra = RandomAccess::open(File::open(file.path()).unwrap()).unwrap();

    assert_eq!(mmap_graph.header().kmer_size, ra.header().kmer_size);
    assert_eq!(mmap_graph.header().num_colors, ra.header().num_colors);
}

#[test]
fn mmap_get_by_canonical_agrees_with_file_backed() {
    let file = fixture();
    let mmap_graph = MmapGraph::open(file.path()).unwrap();
    let mut ra = RandomAccess::open(File::open(file.path()).unwrap()).unwrap();

    for kmer in ["AAA", "AAC", "AAG", "ACA", "CAA"] {
        let from_mmap = mmap_graph.get_by_canonical(kmer).unwrap();
        let from_file = ra.get_by_canonical(kmer).unwrap();
        assert_eq!(from_mmap.kmer_string().unwrap(), from_file.kmer_string().unwrap());
        assert_eq!(from_mmap.coverage(), from_file.coverage());
        assert_eq!(from_mmap.edges(), from_file.edges());
    }
}

#[test]
fn mmap_get_resolves_reverse_complement_like_file_backed() {
    let file = fixture();
    let mmap_graph = MmapGraph::open(file.path()).unwrap();
    let mut ra = RandomAccess::open(File::open(file.path()).unwrap()).unwrap();

    // TTT is the reverse complement of AAA, which is stored.
    let from_mmap = mmap_graph.get("TTT").unwrap();
    let from_file = ra.get("TTT").unwrap();
    assert_eq!(from_mmap.kmer_string().unwrap(), "AAA");
    assert_eq!(from_file.kmer_string().unwrap(), "AAA");
}

#[test]
fn mmap_missing_kmer_matches_file_backed_error() {
    let file = fixture();
    let mmap_graph = MmapGraph::open(file.path()).unwrap();
    let mut ra = RandomAccess::open(File::open(file.path()).unwrap()).unwrap();

    let mmap_err = mmap_graph.get_by_canonical("GGG").unwrap_err();
    let file_err = ra.get_by_canonical("GGG").unwrap_err();
    assert!(matches!(mmap_err, GraphError::NotFound { .. }));
    assert!(matches!(file_err, GraphError::NotFound { .. }));
}

#[test]
fn mmap_iteration_visits_same_kmers_in_same_order_as_file_backed() {
    let file = fixture();
    let mmap_graph = MmapGraph::open(file.path()).unwrap();
    let mut ra = RandomAccess::open(File::open(file.path()).unwrap()).unwrap();

    let mmap_kmers: Vec<String> = mmap_graph.iter().map(|r| r.kmer_string().unwrap()).collect();
    let file_kmers: Vec<String> = ra
        .iter()
        .unwrap()
        .map(|r| r.unwrap().kmer_string().unwrap())
        .collect();
    assert_eq!(mmap_kmers, file_kmers);
    assert_eq!(mmap_kmers, vec!["AAA", "AAC", "AAG", "ACA", "CAA"]);
}

#[test]
fn mmap_get_index_matches_file_backed_get_index() {
    let file = fixture();
    let mmap_graph = MmapGraph::open(file.path()).unwrap();
    let mut ra = RandomAccess::open(File::open(file.path()).unwrap()).unwrap();

    for i in 0..mmap_graph.len() {
        let from_mmap = mmap_graph.get_index(i).unwrap();
        let from_file = ra.get_index(i).unwrap();
        assert_eq!(from_mmap.kmer_string().unwrap(), from_file.kmer_string().unwrap());
    }
}

#[test]
fn mmap_open_nonexistent_file_errors() {
    let result = MmapGraph::open("/nonexistent/path/to/graph.ctx");
    assert!(result.is_err());
}
