use either_rail::Either;

#[test]
fn display_names_the_active_side() {
    assert_eq!(Either::<i32, String>::left(42).to_string(), "Left:42");
    assert_eq!(Either::<i32, String>::right("done".into()).to_string(), "Right:done");
    assert_eq!(format!("{}", Either::<f64, char>::right('x')), "Right:x");
}

#[test]
fn display_nullable_writes_null_for_absent_payloads() {
    let cases = [
        (Either::<Option<i32>, Option<&str>>::left(None), "Left:null"),
        (Either::left(Some(1)), "Left:1"),
        (Either::right(None), "Right:null"),
        (Either::right(Some("v")), "Right:v"),
    ];

    for (either, expected) in cases {
        assert_eq!(either.display_nullable().to_string(), expected);
    }
}

#[test]
fn debug_shows_variant() {
    assert_eq!(format!("{:?}", Either::<i32, &str>::left(1)), "Left(1)");
    assert_eq!(format!("{:?}", Either::<i32, &str>::right("a")), "Right(\"a\")");
}
