#[macro_use]
extern crate matches;

use seq_rename::equiv::EquivalenceMap;
use seq_rename::table::{Cell, Columns, Row, Table};
use seq_rename::ErrorKind;

fn map(pairs: &[(&str, &str)]) -> EquivalenceMap {
    pairs.iter().cloned().collect()
}

fn to_string(table: &Table) -> String {
    let mut out = vec![];
    table.write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn shape(table: &Table) -> Vec<Vec<usize>> {
    table
        .rows()
        .iter()
        .map(|row| row.cells().iter().map(|c| c.tokens().len()).collect())
        .collect()
}

const INPUT: &[u8] = b"foo baz\tqux\n# comment\tfoo\n\nqux\tfoo foo bar\tfoo\r\n";

#[test]
fn parse() {
    let table = Table::from_reader(INPUT).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.width(), 3);
    assert_eq!(shape(&table), vec![vec![2, 1], vec![1, 3, 1]]);
    assert_eq!(table.rows()[1].cells()[1].tokens(), &["foo", "foo", "bar"]);
}

#[test]
fn single_column() {
    let m = map(&[("foo", "bar")]);
    let mut table = Table::from_reader(&b"foo baz\tqux\n"[..]).unwrap();
    let columns = Columns::from_number(1, table.width()).unwrap();
    assert_eq!(table.rename(&m, columns), 1);
    assert_eq!(to_string(&table), "bar baz\tqux\n");
}

#[test]
fn other_columns_untouched() {
    let m = map(&[("foo", "X")]);
    let mut table = Table::from_reader(INPUT).unwrap();
    assert_eq!(table.rename(&m, Columns::Index(1)), 2);
    assert_eq!(to_string(&table), "foo baz\tqux\nqux\tX X bar\tfoo\n");
}

#[test]
fn all_columns() {
    let m = map(&[("foo", "X"), ("qux", "Q")]);
    let mut table = Table::from_reader(INPUT).unwrap();
    let before = shape(&table);
    assert_eq!(table.rename(&m, Columns::All), 6);
    assert_eq!(shape(&table), before);
    assert_eq!(to_string(&table), "X baz\tQ\nQ\tX X bar\tX\n");
}

#[test]
fn short_rows_kept() {
    let m = map(&[("a", "A")]);
    let mut table = Table::from_reader(&b"x\ty\ta\nshort\n"[..]).unwrap();
    let columns = Columns::from_number(3, table.width()).unwrap();
    assert_eq!(table.rename(&m, columns), 1);
    assert_eq!(to_string(&table), "x\ty\tA\nshort\n");
}

#[test]
fn column_out_of_range() {
    let table = Table::from_reader(&b"a\tb\n"[..]).unwrap();
    for &n in &[0, -1, 3, 100] {
        let err = Columns::from_number(n, table.width()).unwrap_err();
        assert_matches!(err.kind(), ErrorKind::ColumnOutOfRange { width: 2, .. });
    }
    assert_eq!(Columns::from_number(2, 2).unwrap(), Columns::Index(1));
    let empty = Table::default();
    assert!(Columns::from_number(1, empty.width()).is_err());
}

#[test]
fn no_overlap_identity() {
    let input = "a b\tc\t\td\nnumbers 1 2\t3\n";
    let mut table = Table::from_reader(input.as_bytes()).unwrap();
    assert_eq!(table.rename(&map(&[("z", "y")]), Columns::All), 0);
    assert_eq!(to_string(&table), input);
}

#[test]
fn double_spaces_preserved() {
    let m = map(&[("a", "b")]);
    let mut row = Row::parse("a  a\tx");
    assert_eq!(row.rename(&m, Columns::All), 2);
    let mut out = vec![];
    row.write(&mut out).unwrap();
    assert_eq!(&out[..], &b"b  b\tx\n"[..]);
}

#[test]
fn numeric_looking_tokens() {
    let m = map(&[("001", "first"), ("2.0", "second")]);
    let mut cell = Cell::parse("001 1 2.0 2");
    assert_eq!(cell.rename(&m), 2);
    assert_eq!(cell.tokens(), &["first", "1", "second", "2"]);
}
