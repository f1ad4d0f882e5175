#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(code) = std::str::from_utf8(data) {
        let chart = tsvchart::parse(code);
        if let Ok(text) = tsvchart::encode_to_string(&chart) {
            // series names survive any encodable chart
            let back = tsvchart::parse(&text);
            let names: Vec<_> = back.data.series.iter().map(|s| &s.name).collect();
            let expected: Vec<_> = chart.data.series.iter().map(|s| &s.name).collect();
            assert_eq!(names, expected, "text: {:?}", text);
        }
    }
});
