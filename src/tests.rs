use crate::{CompoundDate, CompoundType, Date, DoubleType, IndexKey, ModifierType, QualityType, standardize};
use proptest::prelude::*;

#[test]
fn encoded_examples_matching() {
    // Array of (input, expected encoding)
    let cases: Vec<(&str, &str)> = vec![
        ("1 Jan 1900", "19000101"),
        ("Jan 1900", "19000100"),
        ("1900", "19000000"),
        ("Feb 25, 1759/60", "17590225,17600225"),
        ("ABT 1900", "19000000,18990101-19011231"),
        ("EST. 1900", "19000000,18900101-19101231"),
        ("2/23/1900", "19000223"),
        ("2/3/1900", "19000203,19000302"),
        ("before 1900", "19000000,18900101-19001231"),
        ("AFT 1900", "19000000,19000101-19101231"),
        ("between 1900 and 1910", "19000000,19000101-19101231"),
        ("1900 to 1910", "19000000,19000101-19101231"),
        ("JAN QTR 1900", "19000100,19000101-19000331"),
        ("JAN FEB MAR 1900", "19000100,19000101-19000331"),
        ("5 or 15 jan 1900", "19000105,19000115"),
        // spelling and punctuation variants
        ("1st January 1900", "19000101"),
        ("January 1st, 1900", "19000101"),
        ("01-JAN-1900", "19000101"),
        ("circa 1900", "19000000,18990101-19011231"),
        ("c. 1900", "19000000,18990101-19011231"),
        ("calc 1900", "19000000,18900101-19101231"),
        ("1900 (est)", "19000000,18900101-19101231"),
        ("bef. 3 Mar 1900", "19000303,18900101-19000303"),
        ("ABT AFT 1907", "19070000,19070101-19171231"),
        ("23/2/1900", "19000223"),
        ("1-1900", "19000100"),
        ("1756/7", "17560000,17570000"),
        ("1799/1800", "17990000,18000000"),
        ("1900/1", "19000000,19010000"),
        // compounds
        ("from Jan 1900 to Mar 1900", "19000100,19000101-19000331"),
        ("bet 1900-1910", "19000000,19000101-19101231"),
        ("Jan 5 - Mar 10 1900", "19000105,19000105-19000310"),
        ("1900 or 1901", "19000000,19010000"),
        ("between 1910 and 1900", "19000000,19100000"),
        ("est between 1900 and 1910", "19000000,18900101-19201231"),
        ("Jan-Mar 1900", "19000100,19000101-19000331"),
        ("Oct Nov Dec 1900", "19001000,19001001-19001231"),
        ("Dec Qtr 1900", "19001000,19001001-19001231"),
        // early era
        ("50 AD", "00500000"),
        ("44 BC", "00010000"),
        ("150 BC", "00010000"),
        // leading and trailing text
        ("died 1 Jan 1900 in Ohio", "19000101"),
        ("Birth: Jan 1900", "19000100"),
        ("aged 45, 1900", "19000000"),
    ];

    for (input, expected) in cases {
        let date = standardize(input).unwrap_or_else(|| panic!("no date recognized in {input:?}"));
        assert_eq!(date.encode(), expected, "{input}");
    }
}

#[test]
fn structured_examples_matching() {
    let single = |day: u32, month: u32, year: i32| Date { day, month, year, ..Date::default() };

    assert_eq!(standardize("1 Jan 1900"), Some(CompoundDate { first: single(1, 1, 1900), ..CompoundDate::default() }));

    let double = standardize("Feb 25, 1759/60").unwrap();
    assert_eq!(double.first, Date { double: DoubleType::DoubleDate, ..single(25, 2, 1759) });
    assert_eq!(double.kind, CompoundType::None);

    let about = standardize("ABT 1900").unwrap();
    assert_eq!(about.first, Date { modifier: ModifierType::About, ..single(0, 0, 1900) });

    let estimated = standardize("EST. 1900").unwrap();
    assert_eq!(estimated.first, Date { quality: QualityType::Estimated, ..single(0, 0, 1900) });

    let ambiguous = standardize("2/3/1900").unwrap();
    assert_eq!(ambiguous.first, Date { quality: QualityType::Ambiguous, ..single(3, 2, 1900) });

    let range = standardize("between 1900 and 1910").unwrap();
    assert_eq!(range, CompoundDate { first: single(0, 0, 1900), second: single(0, 0, 1910), kind: CompoundType::Range });

    let quarter = standardize("JAN QTR 1900").unwrap();
    assert_eq!(quarter, CompoundDate { first: single(0, 1, 1900), second: single(0, 3, 1900), kind: CompoundType::Range });

    let two = standardize("5 or 15 jan 1900").unwrap();
    assert_eq!(two, CompoundDate { first: single(5, 1, 1900), second: single(15, 1, 1900), kind: CompoundType::Two });
}

#[test]
fn ambiguous_with_equal_day_and_month() {
    let date = standardize("3/3/1900").unwrap();
    assert_eq!(date.first, Date { day: 3, month: 3, year: 1900, quality: QualityType::Ambiguous, ..Date::default() });
    assert_eq!(date.encode(), "19000303,19000303");
}

#[test]
fn unrecognized_examples() {
    for input in ["", "unknown", "   ", "Ohio", "5 or 15", "Jan or Feb", "12/25", "199", "99999", "1 Q 2"] {
        assert_eq!(standardize(input), None, "{input}");
    }
}

#[test]
fn encoded_keys_decode_for_indexing() {
    let key = IndexKey::parse(&standardize("ABT 1900").unwrap().encode()).unwrap();
    assert_eq!(key.dates(), vec![19000000]);
    assert_eq!(key.years(), vec![1899, 1900, 1901]);

    let key = IndexKey::parse(&standardize("5 or 15 jan 1900").unwrap().encode()).unwrap();
    assert_eq!(key.dates(), vec![19000105, 19000115]);
    assert_eq!(key.years(), vec![1900]);
}

#[test]
fn standardize_is_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| standardize("between 1900 and 1910").map(|d| d.encode())))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("19000000,19000101-19101231"));
    }
}

// --- Properties ---------------------------------------------------------------

const VOCABULARY: &[&str] = &[
    "1", "2", "3", "5", "12", "13", "15", "25", "31", "0", "45", "150", "199", "200", "1759", "60", "1800", "1900",
    "1910", "2200", "3000", "Jan", "feb", "MAR", "Sept", "Dec", "abt", "bef", "aft", "est", "calc", "between", "and",
    "from", "to", "or", "qtr", "th", "BC", "AD", "CE", "the", "-", "/", ",", ".", "(", "of",
];

fn date_like() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(VOCABULARY), 0..9).prop_map(|words| words.join(" "))
}

fn check_date_fields(date: &Date) {
    assert!(date.month <= 12, "month {date:?}");
    assert!(date.day <= 31, "day {date:?}");
    assert!((0..=2200).contains(&date.year), "year {date:?}");
    if date.quality == QualityType::Ambiguous {
        assert!((1..=12).contains(&date.day) && (1..=12).contains(&date.month), "ambiguous {date:?}");
        // day == month is still ambiguous; both readings encode the same
        if date.day == date.month {
            assert_eq!(date.year_mm_dd(), date.swapped().year_mm_dd());
        } else {
            assert_ne!(date.year_mm_dd(), date.swapped().year_mm_dd());
        }
    }
    if date.double == DoubleType::DoubleDate {
        assert!(date.year < 9999);
    }
}

proptest! {
    #[test]
    fn standardize_is_deterministic(input in date_like()) {
        prop_assert_eq!(standardize(&input), standardize(&input));
    }

    #[test]
    fn arbitrary_text_never_panics(input in ".{0,40}") {
        if let Some(date) = standardize(&input) {
            prop_assert!(date.encode().is_ascii());
        }
    }

    #[test]
    fn encoding_has_canonical_shape(input in date_like()) {
        if let Some(date) = standardize(&input) {
            let encoded = date.encode();
            let shape = regex::Regex::new(r"^[0-9]{8}(,[0-9]{8}(-[0-9]{8})?)?$").unwrap();
            prop_assert!(shape.is_match(&encoded), "{:?} -> {}", input, encoded);
            prop_assert!(IndexKey::parse(&encoded).is_ok());
            if date.kind == CompoundType::Range {
                prop_assert!(encoded.contains('-'));
            }
        }
    }

    #[test]
    fn ranges_are_ordered(input in date_like()) {
        if let Some(date) = standardize(&input) {
            if date.kind == CompoundType::Range {
                prop_assert!(date.first.year_mm_dd() <= date.second.year_mm_dd(), "{:?}", date);
            }
        }
    }

    #[test]
    fn fields_stay_in_range(input in date_like()) {
        if let Some(date) = standardize(&input) {
            check_date_fields(&date.first);
            if date.kind != CompoundType::None {
                check_date_fields(&date.second);
            }
        }
    }

    #[test]
    fn bc_years_encode_as_year_one(year in 0u32..200) {
        let date = standardize(&format!("{year} BC")).unwrap();
        prop_assert_eq!(date.encode(), "00010000");
    }

    #[test]
    fn reversed_between_is_two_dates(a in 200i32..=2200, b in 200i32..=2200) {
        prop_assume!(a > b);
        let date = standardize(&format!("between {a} and {b}")).unwrap();
        prop_assert_eq!(date.kind, CompoundType::Two);
        prop_assert_eq!((date.first.year, date.second.year), (b, a));
    }
}
