use either_rail::convert::*;
use either_rail::traits::IntoEither;
use either_rail::Either;

#[test]
fn either_to_result_maps_right_to_ok() {
    assert_eq!(either_to_result(Either::<&str, i32>::right(7)), Ok(7));
    assert_eq!(either_to_result(Either::<&str, i32>::left("boom")), Err("boom"));
}

#[test]
fn result_to_either_preserves_side() {
    assert_eq!(result_to_either::<&str, i32>(Ok(3)), Either::right(3));
    assert_eq!(result_to_either::<&str, i32>(Err("fail")), Either::left("fail"));
}

#[test]
fn option_conversions_use_supplied_left() {
    assert_eq!(option_to_either(Some(1), "missing"), Either::right(1));
    assert_eq!(option_to_either(None::<i32>, "missing"), Either::left("missing"));

    assert_eq!(either_to_option(Either::<&str, i32>::right(2)), Some(2));
    assert_eq!(either_to_option(Either::<&str, i32>::left("gone")), None);
}

#[test]
fn into_either_for_standard_containers() {
    let parsed = "17".parse::<u8>().into_either();
    assert_eq!(parsed.map_left(|e| e.to_string()), Either::right(17));

    let overflow = "300".parse::<u8>().into_either();
    assert!(overflow.is_left());

    assert_eq!(Some("x").into_either(), Either::right("x"));
    assert_eq!(None::<&str>.into_either(), Either::left(()));
}

#[test]
fn question_mark_through_result_round_trip() {
    fn double_right(e: Either<String, i32>) -> Result<i32, String> {
        let value = either_to_result(e)?;
        Ok(value * 2)
    }

    assert_eq!(double_right(Either::right(21)), Ok(42));
    assert_eq!(double_right(Either::left("nope".into())), Err("nope".to_string()));
}
