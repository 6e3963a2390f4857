// Property tests for the invariants every suggestion list must hold,
// whatever contacts come in.

use std::collections::HashSet;

use proptest::prelude::*;
use siddes_suggest::model::ContactMatch;
use siddes_suggest::{suggest, MAX_MEMBERS, MAX_SUGGESTIONS};

const FIRST: &[&str] = &["maria", "john", "kofi", "nina", "ava", "zed", "amina", "otieno"];
const LAST: &[&str] = &["kamau", "boulder", "otieno", "wanjiru", "vex", "li", "crossfit"];
const DOMAINS: &[&str] = &["acme.io", "bigco.com", "safaricom.co.ke", "gmail.com"];

fn contact() -> impl Strategy<Value = ContactMatch> {
    (
        0..FIRST.len(),
        0..LAST.len(),
        0u8..40,
        prop::option::of((0..DOMAINS.len(), any::<bool>())),
    )
        .prop_map(|(f, l, n, hint)| {
            let handle = format!("@{}_{}{}", FIRST[f], LAST[l], n);
            let name = format!("{} {}", FIRST[f], LAST[l]);
            let m = ContactMatch::new(handle, name);
            match hint {
                Some((d, true)) => m.at_work(DOMAINS[d]),
                _ => m,
            }
        })
}

proptest! {
    #[test]
    fn output_invariants_hold(matches in prop::collection::vec(contact(), 0..80)) {
        let out = suggest(&matches);

        prop_assert!(out.len() <= MAX_SUGGESTIONS);
        let mut seen = HashSet::new();
        for s in &out {
            prop_assert!(s.members.len() >= 2);
            prop_assert!(s.members.len() <= MAX_MEMBERS);
            for m in &s.members {
                prop_assert!(m.starts_with('@'));
                prop_assert!(seen.insert(m.clone()), "{} in two suggestions", m);
            }
        }
    }

    #[test]
    fn same_input_same_output(matches in prop::collection::vec(contact(), 0..40)) {
        prop_assert_eq!(suggest(&matches), suggest(&matches));
    }

    #[test]
    fn one_unique_contact_is_empty(m in contact(), copies in 1usize..4) {
        let matches = vec![m; copies];
        prop_assert!(suggest(&matches).is_empty());
    }
}
