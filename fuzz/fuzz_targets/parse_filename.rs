#![no_main]

use ddcorpus::filename::{parse_filename, FilenameParser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(record) = parse_filename(name) {
        // anything accepted must re-serialize to a name that parses to the same record
        let reparsed = parse_filename(&record.to_filename()).expect("re-serialized name parses");
        assert_eq!(record, reparsed);
    }

    if let Some(fixed) = FilenameParser::default().suggest_fix(name) {
        assert!(parse_filename(&fixed).is_ok());
    }
});
