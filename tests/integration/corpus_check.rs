//! Running the corpus harness over files on disk.

use super::common::{pseudo_random_text, repeat_to, write_corpus, FIBONACCI_64K};
use savera::harness::bench_corpus;
use savera::{check_corpus, BatchSummary, BuilderKind, CorpusCache, CorpusManifest, HarnessConfig};
use std::fs;

fn config(builder: BuilderKind, jobs: Option<usize>) -> HarnessConfig {
    HarnessConfig {
        builder,
        jobs,
        progress: false,
    }
}

#[test]
fn gauntlet_style_corpus_passes_with_both_builders() {
    let dir = tempfile::tempdir().unwrap();
    let random = pseudo_random_text(4096, 255, 42);
    let paths = write_corpus(
        dir.path(),
        &[
            ("abac", &repeat_to(b"abac", 1000)[..]),
            ("abba", &repeat_to(b"abba", 999)[..]),
            ("fibo", &FIBONACCI_64K[..2048]),
            ("zeros", &[0u8; 512][..]),
            ("random", &random[..]),
            ("empty", &b""[..]),
        ],
    );

    for builder in [BuilderKind::Sais, BuilderKind::Naive] {
        let outcomes = check_corpus(&paths, &config(builder, Some(2))).unwrap();
        let summary = BatchSummary::from_outcomes(&outcomes);
        assert!(summary.all_passed(), "{:?}", outcomes);
        assert_eq!(summary.total, 6);

        // Outcomes come back in input order
        let names: Vec<_> = outcomes
            .iter()
            .map(|o| o.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["abac", "abba", "fibo", "zeros", "random", "empty"]);
        assert!(outcomes.iter().all(|o| o.builder == builder.name()));
    }
}

#[test]
fn outcome_identifies_file_content() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_corpus(dir.path(), &[("banana", &b"banana"[..])]);
    let outcomes = check_corpus(&paths, &config(BuilderKind::Sais, Some(1))).unwrap();
    assert_eq!(outcomes[0].bytes, 6);
    assert_eq!(outcomes[0].crc32, crc32fast::hash(b"banana"));
}

#[test]
fn unreadable_file_aborts_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = write_corpus(dir.path(), &[("ok", &b"fine"[..])]);
    paths.push(dir.path().join("missing"));
    let err = check_corpus(&paths, &config(BuilderKind::Sais, None)).unwrap_err();
    assert!(format!("{:#}", err).contains("missing"));
}

#[test]
fn manifest_drives_the_check() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("large");
    fs::create_dir(&corpus).unwrap();
    write_corpus(&corpus, &[("e.coli", &b"agcttttcattctgactgca"[..]), ("world", &b"the world the world"[..])]);
    let manifest_path = dir.path().join("large.json");
    fs::write(
        &manifest_path,
        r#"{ "name": "large", "root": "large", "files": ["e.coli", "world"] }"#,
    )
    .unwrap();

    let manifest = CorpusManifest::load(&manifest_path).unwrap();
    assert_eq!(manifest.name, "large");
    let outcomes = check_corpus(&manifest.paths(), &config(BuilderKind::Sais, None)).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.passed()));
}

#[test]
fn json_report_shape() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_corpus(dir.path(), &[("a", &b"abracadabra"[..])]);
    let outcomes = check_corpus(&paths, &config(BuilderKind::Sais, None)).unwrap();
    let json = serde_json::to_value(&outcomes[0]).unwrap();
    assert_eq!(json["bytes"], 11);
    assert_eq!(json["builder"], "sais");
    assert!(json["error"].is_null());

    let summary = serde_json::to_value(BatchSummary::from_outcomes(&outcomes)).unwrap();
    assert_eq!(summary["passed"], 1);
    assert_eq!(summary["failed"], 0);
}

#[test]
fn bench_reads_each_file_once() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_corpus(dir.path(), &[("x", &b"xyzzy"[..]), ("y", &b"yyyy"[..])]);
    let cache = CorpusCache::new();

    let first = bench_corpus(&paths, &cache, BuilderKind::Sais, 2).unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.total_bytes(), 9);

    // Served from the cache even after the files are gone
    fs::remove_file(&paths[0]).unwrap();
    fs::remove_file(&paths[1]).unwrap();
    let second = bench_corpus(&paths, &cache, BuilderKind::Naive, 1).unwrap();
    assert_eq!(second[1].bytes, 4);
    assert_eq!(second[1].builder, "naive");
}
