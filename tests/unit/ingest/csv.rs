use super::*;

#[test]
fn drops_rows_with_unparseable_cells() {
    let out = import_csv("x,y\n1,4\n2,7\n3,bad\n");
    assert_eq!(out.rows, vec![(1.0, 4.0), (2.0, 7.0)]);
    assert_eq!(out.dropped, 1);
    assert!(out.columns.from_header);
}

#[test]
fn header_heuristics_pick_named_columns() {
    let c = choose_columns("id, Time ,label,Value");
    assert_eq!((c.x, c.y, c.from_header), (1, 3, true));

    let out = import_csv("id,time,value\n9,1,10\n9,2,20");
    assert_eq!(out.rows, vec![(1.0, 10.0), (2.0, 20.0)]);
}

#[test]
fn falls_back_to_first_two_columns() {
    let c = choose_columns("a,b,c");
    assert_eq!((c.x, c.y, c.from_header), (0, 1, false));

    let out = import_csv("a,b\n1,2\n3,4\n");
    assert_eq!(out.rows, vec![(1.0, 2.0), (3.0, 4.0)]);
}

#[test]
fn empty_input_yields_no_rows() {
    let out = import_csv("");
    assert!(out.rows.is_empty());
    assert_eq!(out.dropped, 0);

    let header_only = import_csv("x,y\n");
    assert!(header_only.rows.is_empty());
}

#[test]
fn short_rows_and_crlf_are_tolerated() {
    let out = import_csv("x,y\r\n1,2\r\n3\r\n4,5\r\n");
    assert_eq!(out.rows, vec![(1.0, 2.0), (4.0, 5.0)]);
    assert_eq!(out.dropped, 1);
}

#[test]
fn float_prefix_matches_lenient_parsing() {
    assert_eq!(parse_float_prefix(" 3.5kg"), Some(3.5));
    assert_eq!(parse_float_prefix("-2"), Some(-2.0));
    assert_eq!(parse_float_prefix(".5"), Some(0.5));
    assert_eq!(parse_float_prefix("5."), Some(5.0));
    assert_eq!(parse_float_prefix("1e3x"), Some(1000.0));
    assert_eq!(parse_float_prefix("1e"), Some(1.0));
    assert_eq!(parse_float_prefix("+7"), Some(7.0));
    assert_eq!(parse_float_prefix("bad"), None);
    assert_eq!(parse_float_prefix("-"), None);
    assert_eq!(parse_float_prefix("."), None);
    assert_eq!(parse_float_prefix(""), None);
    assert_eq!(parse_float_prefix("1e999"), None);
}
