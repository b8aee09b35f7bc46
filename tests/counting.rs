mod common;

use varmat::{
    MAX_ALLELES, MatrixError, RefStates, StateCounts, VariantMatrix, process_variable_sites,
};

#[test]
fn counts_one_site() {
    let m = common::singleton_matrix();
    let mut c = StateCounts::new();
    c.apply(m.site(0).unwrap().iter()).unwrap();
    assert_eq!(c.n, 4);
    assert_eq!(c.counts[0], 2);
    assert_eq!(c.counts[1], 2);
    assert!(c.counts[2..].iter().all(|&count| count == 0));
    assert!(c.is_variable());
}

#[test]
fn mask_cells_count_toward_nothing() {
    let data = vec![0, VariantMatrix::MASK, 1, VariantMatrix::MASK];
    let m = VariantMatrix::new(data, vec![0.5]).unwrap();
    let mut c = StateCounts::new();
    c.apply(m.site(0).unwrap().iter()).unwrap();
    assert_eq!(c.n, 2);
    assert_eq!(c.counts[0], 1);
    assert_eq!(c.counts[1], 1);
    assert_eq!(c.n, c.counts.iter().sum::<u32>());
}

#[test]
fn apply_is_additive_across_views() {
    let m = common::singleton_matrix();

    let mut pooled = StateCounts::new();
    pooled.apply(m.sample(0).unwrap().iter()).unwrap();
    pooled.apply(m.sample(1).unwrap().iter()).unwrap();

    let mut first = StateCounts::new();
    first.apply(m.sample(0).unwrap().iter()).unwrap();
    let mut second = StateCounts::new();
    second.apply(m.sample(1).unwrap().iter()).unwrap();

    assert_eq!(pooled.n, first.n + second.n);
    for s in 0..MAX_ALLELES {
        assert_eq!(pooled.counts[s], first.counts[s] + second.counts[s]);
    }
}

#[test]
fn invalid_state_commits_nothing() {
    let mut c = StateCounts::new();
    let err = c.apply([0i8, 1, 9]).unwrap_err();
    match err {
        MatrixError::InvalidState { state } => assert_eq!(state, 9),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(c.n, 0);
    assert_eq!(c.counts, [0; MAX_ALLELES]);

    // Negative non-mask values are malformed too
    assert!(matches!(
        c.apply([-1i8]).unwrap_err(),
        MatrixError::InvalidState { state: -1 }
    ));
}

#[test]
fn refstate_is_stored_but_never_interpreted() {
    let m = common::two_sample_matrix();
    let mut plain = StateCounts::new();
    plain.apply(m.site(0).unwrap().iter()).unwrap();
    let mut seeded = StateCounts::with_refstate(0);
    seeded.apply(m.site(0).unwrap().iter()).unwrap();
    assert_eq!(seeded.refstate, Some(0));
    assert_eq!(seeded.counts, plain.counts);
    assert_eq!(seeded.n, plain.n);
}

#[test]
fn scanning_keeps_only_variable_sites() {
    // [0,1] and [1,0] are both variable
    let m = common::two_sample_matrix();
    let counts = process_variable_sites(&m, &RefStates::Absent).unwrap();
    assert_eq!(counts.len(), 2);
    for c in &counts {
        assert_eq!(c.n, 2);
        assert_eq!(c.counts[0], 1);
        assert_eq!(c.counts[1], 1);
        assert_eq!(c.refstate, None);
    }
}

#[test]
fn invariant_sites_are_dropped() {
    let data = vec![
        1, 1, 1, // invariant
        0, 1, 1, // variable
        VariantMatrix::MASK,
        VariantMatrix::MASK,
        VariantMatrix::MASK, // all missing
        0,
        0,
        VariantMatrix::MASK, // one state present
    ];
    let m = VariantMatrix::new(data, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
    let counts = process_variable_sites(&m, &RefStates::Absent).unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].counts[0], 1);
    assert_eq!(counts[0].counts[1], 2);
}

#[test]
fn uniform_refstate_seeds_every_site() {
    let m = common::two_sample_matrix();
    let counts = process_variable_sites(&m, &RefStates::Uniform(0)).unwrap();
    assert_eq!(counts.len(), 2);
    assert!(counts.iter().all(|c| c.refstate == Some(0)));
}

#[test]
fn per_site_refstates_follow_site_order() {
    let data = vec![
        0, 1, // variable
        1, 1, // invariant, dropped
        0, 1, // variable
    ];
    let m = VariantMatrix::new(data, vec![0.1, 0.2, 0.3]).unwrap();
    let counts = process_variable_sites(&m, &RefStates::PerSite(vec![0, 1, 1])).unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].refstate, Some(0));
    assert_eq!(counts[1].refstate, Some(1));
}

#[test]
fn per_site_refstates_length_must_match() {
    let m = common::two_sample_matrix();
    let err = process_variable_sites(&m, &RefStates::PerSite(vec![0])).unwrap_err();
    match err {
        MatrixError::RefStatesLength { got, expected } => {
            assert_eq!(got, 1);
            assert_eq!(expected, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_data_fails_the_scan() {
    let m = VariantMatrix::new(vec![0, 99], vec![0.1]).unwrap();
    assert!(matches!(
        process_variable_sites(&m, &RefStates::Absent).unwrap_err(),
        MatrixError::InvalidState { state: 99 }
    ));
}
