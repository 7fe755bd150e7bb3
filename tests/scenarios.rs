use pairalign::*;

fn dna() -> SubstitutionMatrix {
    SubstitutionMatrix::uniform("ACGTU", 1, -1)
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn check_shape(alns: &[Alignment], a: &str, b: &str, mode: Mode) {
    for aln in alns {
        assert_eq!(aln.first.chars().count(), aln.second.chars().count(), "{aln:?}");
        let (ua, ub) = aln.ungapped();
        match mode {
            Mode::Global => {
                assert_eq!(ua, a);
                assert_eq!(ub, b);
            }
            Mode::Local => {
                assert!(a.contains(&ua), "{ua} not in {a}");
                assert!(b.contains(&ub), "{ub} not in {b}");
                assert!(aln.score >= 0);
            }
        }
    }
}

#[test]
fn global_textbook_example() {
    let (a, b) = ("GATTACA", "GCATGCU");
    let grids = fill(&chars(a), &chars(b), &dna(), -1, Mode::Global).unwrap();
    assert_eq!(grids.score(grids.end_cell()), 0);

    let alns = needle(a, b, &dna(), &NeedleParams { gap_penalty: -1, max_alignments: 10 }).unwrap();
    check_shape(&alns, a, b, Mode::Global);
    let rows: Vec<(&str, &str)> = alns.iter().map(|x| (x.first.as_str(), x.second.as_str())).collect();
    assert_eq!(
        rows,
        vec![("G-ATTACA", "GCA-TGCU"), ("G-ATTACA", "GCAT-GCU"), ("G-ATTACA", "GCATG-CU")]
    );
    assert!(alns.iter().all(|x| x.score == 0));
}

#[test]
fn global_cap_keeps_first_found() {
    let all = needle("GATTACA", "GCATGCU", &dna(), &NeedleParams { gap_penalty: -1, max_alignments: 10 }).unwrap();
    let two = needle("GATTACA", "GCATGCU", &dna(), &NeedleParams { gap_penalty: -1, max_alignments: 2 }).unwrap();
    assert_eq!(two, all[..2].to_vec());
    let none = needle("GATTACA", "GCATGCU", &dna(), &NeedleParams { gap_penalty: -1, max_alignments: 0 }).unwrap();
    assert!(none.is_empty());
}

#[test]
fn local_textbook_example() {
    let (a, b) = ("TGTTACGG", "GGTTGACTA");
    let grids = fill(&chars(a), &chars(b), &dna(), -1, Mode::Local).unwrap();
    let (best, cells) = grids.best_cells();
    assert_eq!(best, 4);
    assert_eq!(cells, vec![Cell::new(6, 7)]);

    let alns = water(a, b, &dna(), &WaterParams { gap_penalty: -1, max_alignments: 10 }).unwrap();
    check_shape(&alns, a, b, Mode::Local);
    assert_eq!(alns, vec![Alignment { first: "GTT-AC".into(), second: "GTTGAC".into(), score: 4 }]);
}

#[test]
fn local_score_is_start_score() {
    let (a, b) = (chars("TGTTACGG"), chars("GGTTGACTA"));
    let grids = fill(&a, &b, &dna(), -1, Mode::Local).unwrap();
    let alns = traceback(&a, &b, &grids, Cell::new(6, 7), 4, 5).unwrap();
    assert!(alns.iter().all(|x| x.score == 4));
}

#[test]
fn tie_gives_two_alignments() {
    // One A against AA: the match can take either column.
    let m = SubstitutionMatrix::uniform("A", 1, -1);
    let alns = needle("A", "AA", &m, &NeedleParams { gap_penalty: -1, max_alignments: 5 }).unwrap();
    assert_eq!(alns.len(), 2);
    assert_ne!(alns[0], alns[1]);
    assert_eq!(alns[0].score, alns[1].score);
    check_shape(&alns, "A", "AA", Mode::Global);
}

#[test]
fn reruns_are_identical() {
    let params = WaterParams { gap_penalty: -1, max_alignments: 4 };
    let first = water("ACGTTGCA", "TGCAACGT", &dna(), &params).unwrap();
    let second = water("ACGTTGCA", "TGCAACGT", &dna(), &params).unwrap();
    assert_eq!(first, second);
    check_shape(&first, "ACGTTGCA", "TGCAACGT", Mode::Local);
    assert!(first.len() <= 4);
}

#[test]
fn empty_sequences_degenerate() {
    let g = needle("", "ACG", &dna(), &NeedleParams::default()).unwrap();
    assert_eq!(g, vec![Alignment { first: "---".into(), second: "ACG".into(), score: -6 }]);

    let l = water("ACG", "", &dna(), &WaterParams::default()).unwrap();
    assert_eq!(l, vec![Alignment { first: String::new(), second: String::new(), score: 0 }]);
}

#[test]
fn matrix_file_drives_alignment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dna.csv");
    std::fs::write(&path, " ,A,C,G,T\nA, 2,-1,-1,-1\nC,-1, 2,-1,-1\nG,-1,-1, 2,-1\nT,-1,-1,-1, 2\n").unwrap();
    let m = SubstitutionMatrix::from_path(&path).unwrap();

    let alns = water("TTACGTT", "GACGG", &m, &WaterParams { gap_penalty: -2, max_alignments: 3 }).unwrap();
    assert_eq!(alns[0].first, "ACG");
    assert_eq!(alns[0].score, 6);
}

#[test]
fn unknown_symbol_fails() {
    let m = SubstitutionMatrix::uniform("ACGT", 1, -1);
    let err = water("ACGN", "ACG", &m, &WaterParams::default()).unwrap_err();
    assert!(matches!(err, AlignError::MissingSubstitution { row: 'N', .. }));
    assert!(err.to_string().contains("missing substitution entry"));
}

#[test]
fn report_matches_collection_order() {
    let alns = needle("A", "AA", &SubstitutionMatrix::uniform("A", 1, -1), &NeedleParams { gap_penalty: -1, max_alignments: 5 }).unwrap();
    let mut buf = Vec::new();
    write_report(&mut buf, Mode::Global.title(), &alns).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Global alignment no. 1:\n-A\nAA\nScore: 0\n\nGlobal alignment no. 2:\nA-\nAA\nScore: 0\n\n"
    );
}
