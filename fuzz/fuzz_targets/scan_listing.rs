#![no_main]

use ddcorpus::{completeness, json, provenance, scan, ScanConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let result = scan(text.lines(), &ScanConfig::default());
    let corpus = &result.corpus;

    for code in corpus.index().newspapers() {
        let _ = corpus.gaps(code);
        let _ = corpus.coverage_gaps(code);
        if let Some(share) = corpus.completeness_percentage(code) {
            assert!((0.0..=1.0).contains(&share));
        }
        for issue in corpus.index().issues_of(code) {
            let check = completeness::check(&issue);
            assert!(check.present_pages <= usize::from(check.expected_pages));
            assert!(provenance::resolve(&issue).num_libraries >= 1);
        }
    }
    json::corpus_to_json(corpus).expect("report serializes");
});
