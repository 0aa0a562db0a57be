#[macro_use]
extern crate matches;

use seq_rename::equiv::EquivalenceMap;
use seq_rename::fasta::{self, OwnedRecord, Reader};
use seq_rename::ErrorKind;

const FASTA: &[u8] = b">id desc
ACCGTAGGCT
CCGTAGGCTG
CGTAGGCTGA
GTAGGCTGAA
CCCC
>id2
ATTGTTGTTT
ATTGTTGTTT
ATTGTTGTTT
GGGG
";

fn expected() -> Vec<OwnedRecord> {
    vec![
        OwnedRecord::new(
            &b"id desc"[..],
            &b"ACCGTAGGCTCCGTAGGCTGCGTAGGCTGAGTAGGCTGAACCCC"[..],
        ),
        OwnedRecord::new(&b"id2"[..], &b"ATTGTTGTTTATTGTTGTTTATTGTTGTTTGGGG"[..]),
    ]
}

fn map(pairs: &[(&str, &str)]) -> EquivalenceMap {
    pairs.iter().cloned().collect()
}

fn rename_to_string(input: &[u8], map: &EquivalenceMap, wrap: usize) -> String {
    let mut out = vec![];
    for rec in Reader::new(input).rename(map) {
        rec.unwrap().write_wrap(&mut out, wrap).unwrap();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn reader() {
    // try different initial capacities to test
    // lines spanning several buffer fills
    for cap in 1..100 {
        let records: Vec<_> = Reader::with_capacity(FASTA, cap)
            .into_records()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records, expected(), "capacity {}", cap);
    }
}

#[test]
fn crlf() {
    let input: Vec<u8> = FASTA
        .split(|&b| b == b'\n')
        .flat_map(|l| l.iter().chain(b"\r\n"))
        .cloned()
        .collect();
    let records: Vec<_> = Reader::new(&input[..])
        .records()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records, expected());
}

#[test]
fn id_desc() {
    let rec = OwnedRecord::new(&b"id some desc"[..], &b""[..]);
    assert_eq!(rec.id(), Ok("id"));
    assert_eq!(rec.desc(), Some(Ok("some desc")));
    let rec = OwnedRecord::new(&b"id\tdesc"[..], &b""[..]);
    assert_eq!(rec.id_bytes(), b"id");
    assert_eq!(rec.desc_bytes(), Some(&b"desc"[..]));
    let rec = OwnedRecord::new(&b"id"[..], &b""[..]);
    assert_eq!(rec.desc(), None);
}

#[test]
fn no_seq() {
    let mut reader = Reader::new(&b">id1\n>id2\n"[..]);
    let r = reader.next().unwrap().unwrap();
    assert_eq!(r.id_bytes(), b"id1");
    assert!(r.seq().is_empty());
    let r = reader.next().unwrap().unwrap();
    assert_eq!(r.id_bytes(), b"id2");
    assert!(r.seq().is_empty());
    assert!(reader.next().is_none());
}

#[test]
fn empty_input() {
    assert!(Reader::new(&b""[..]).next().is_none());
    assert!(Reader::new(&b"\n\r\n\n"[..]).next().is_none());
}

#[test]
fn empty_lines() {
    let mut reader = Reader::new(&b"\n\n>id\nAT\n\nGC\n\n\n"[..]);
    let r = reader.next().unwrap().unwrap();
    assert_eq!(r.seq(), b"ATGC");
    assert!(reader.next().is_none());
}

#[test]
fn no_newline_end() {
    let mut reader = Reader::new(&b">id\nATGC"[..]);
    assert_eq!(reader.next().unwrap().unwrap().seq(), b"ATGC");
    assert!(reader.next().is_none());
}

#[test]
fn invalid_start() {
    let mut reader = Reader::new(&b"\r\nid\nATGC\n"[..]);
    let err = reader.next().unwrap().expect_err("Should be an error");
    assert_matches!(err.kind(), ErrorKind::MalformedFasta { line: 2, found: b'i' });
    assert!(reader.next().is_none());
}

#[test]
fn rename() {
    let m = map(&[("seq1", "SampleA")]);
    let out = rename_to_string(b">seq1 desc\nACGT\n>seq2 desc\nTTTT\n", &m, fasta::DEFAULT_WRAP);
    assert_eq!(out, ">SampleA\nACGT\n>seq2 desc\nTTTT\n");
}

#[test]
fn rename_exact_match_only() {
    let m = map(&[("seq", "X"), ("desc", "Y")]);
    let input = b">seq1 desc\nACGT\n>seq desc\nACGT\n";
    let out = rename_to_string(input, &m, 0);
    assert_eq!(out, ">seq1 desc\nACGT\n>X\nACGT\n");
}

#[test]
fn rename_counts() {
    let m = map(&[("id2", "second")]);
    let mut renamed = Reader::new(FASTA).rename(&m);
    let records: Vec<_> = renamed.by_ref().collect::<Result<_, _>>().unwrap();
    assert_eq!(renamed.num_records(), 2);
    assert_eq!(renamed.num_renamed(), 1);
    assert_eq!(records[1].head(), b"second");
}

#[test]
fn sequence_unchanged() {
    let m = map(&[("id", "new"), ("id2", "new2")]);
    let renamed: Vec<_> = Reader::new(FASTA)
        .rename(&m)
        .collect::<Result<_, _>>()
        .unwrap();
    let original = expected();
    for (r, o) in renamed.iter().zip(&original) {
        assert_eq!(r.seq(), o.seq());
    }
    assert_eq!(renamed[0].head(), b"new");
    assert_eq!(renamed[1].head(), b"new2");
}

#[test]
fn no_overlap_identity() {
    // single-line input without wrapping is reproduced exactly
    let input = b">a x\nACGT\n>b\nGG\n>c y z\n\n";
    let m = map(&[("other", "name")]);
    let out = rename_to_string(input, &m, 0);
    assert_eq!(out.as_bytes(), &input[..]);
}

#[test]
fn write_wrap() {
    let rec = OwnedRecord::new(&b"id desc"[..], &b"ACGTACGTAC"[..]);
    let mut out = vec![];
    rec.write_wrap(&mut out, 3).unwrap();
    assert_eq!(&out[..], &b">id desc\nACG\nTAC\nGTA\nC\n"[..]);

    let mut out = vec![];
    rec.write(&mut out).unwrap();
    assert_eq!(&out[..], &b">id desc\nACGTACGTAC\n"[..]);

    let long = OwnedRecord::new(&b"x"[..], vec![b'A'; 130]);
    let mut out = vec![];
    long.write_wrap(&mut out, fasta::DEFAULT_WRAP).unwrap();
    let lines: Vec<_> = out.split(|&b| b == b'\n').map(|l| l.len()).collect();
    assert_eq!(lines, vec![2, 60, 60, 10, 0]);
}

#[test]
fn write_empty_seq() {
    let rec = OwnedRecord::new(&b"id"[..], &b""[..]);
    let mut out = vec![];
    rec.write_wrap(&mut out, 60).unwrap();
    assert_eq!(&out[..], &b">id\n"[..]);
}

#[test]
fn invalid_utf8_id_passes() {
    let m = map(&[("id", "new")]);
    let out = {
        let mut out = vec![];
        for rec in Reader::new(&b">\xffid\nAC\n"[..]).rename(&m) {
            rec.unwrap().write(&mut out).unwrap();
        }
        out
    };
    assert_eq!(&out[..], &b">\xffid\nAC\n"[..]);
}

#[test]
fn whitespace_lines() {
    let mut reader = Reader::new(&b"  \n>a\nAC\n   \nGT\n\t\r\n"[..]);
    let r = reader.next().unwrap().unwrap();
    assert_eq!(r.seq(), b"ACGT");
    assert!(reader.next().is_none());

    let m = map(&[("a", "b")]);
    let out = rename_to_string(b"  \n>a\nAC\n   \nGT\n", &m, fasta::DEFAULT_WRAP);
    assert_eq!(out, ">b\nACGT\n");
}

#[test]
fn space_before_id() {
    let rec = OwnedRecord::new(&b" seq1 d"[..], &b""[..]);
    assert_eq!(rec.id(), Ok("seq1"));
    assert_eq!(rec.desc(), Some(Ok("d")));
    let rec = OwnedRecord::new(&b" \t"[..], &b""[..]);
    assert_eq!(rec.id(), Ok(""));

    let m = map(&[("seq1", "SampleA")]);
    let out = rename_to_string(b"> seq1 d\nAC\n", &m, 0);
    assert_eq!(out, ">SampleA\nAC\n");
}
