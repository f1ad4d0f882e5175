#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let chart = tsvchart::parse(s);
        let rows = chart.data.row_count();
        for series in &chart.data.series {
            assert_eq!(series.data.len(), rows);
        }
        assert!(chart.data.categories.is_empty() || chart.data.categories.len() == rows);
    }
});
