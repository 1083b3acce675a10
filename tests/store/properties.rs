//! Property Tests
//!
//! Random write sequences checked against a naive model: "the most recently
//! appended entry with write_ts <= t < expiry".

use chronokv::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Set { field: u8, value: u16 },
    SetTtl { field: u8, value: u16, ttl: i64 },
    Delete { field: u8 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..3, any::<u16>()).prop_map(|(field, value)| Op::Set { field, value }),
        (0u8..3, any::<u16>(), -2i64..8)
            .prop_map(|(field, value, ttl)| Op::SetTtl { field, value, ttl }),
        (0u8..3).prop_map(|field| Op::Delete { field }),
    ]
}

/// Ops paired with non-decreasing timestamps
fn history_strategy() -> impl Strategy<Value = Vec<(Timestamp, Op)>> {
    prop::collection::vec((0i64..3, op_strategy()), 0..40).prop_map(|steps| {
        let mut t = 0;
        steps
            .into_iter()
            .map(|(gap, op)| {
                t += gap;
                (t, op)
            })
            .collect()
    })
}

fn field_name(field: u8) -> String {
    format!("f{}", field)
}

/// Reference model: entries per field in append order
struct Model {
    fields: Vec<Vec<VersionedEntry>>,
}

impl Model {
    fn new() -> Self {
        Self {
            fields: vec![Vec::new(); 3],
        }
    }

    fn get(&self, field: u8, t: Timestamp) -> Option<String> {
        self.fields[field as usize]
            .iter()
            .rev()
            .find(|e| e.write_ts <= t && e.expiry.map_or(true, |x| t < x))
            .and_then(|e| e.value.clone())
    }

    fn apply(&mut self, t: Timestamp, op: &Op) {
        match op {
            Op::Set { field, value } => self.fields[*field as usize]
                .push(VersionedEntry::live(t, value.to_string())),
            Op::SetTtl { field, value, ttl } => self.fields[*field as usize]
                .push(VersionedEntry::expiring(t, value.to_string(), t + ttl)),
            Op::Delete { field } => {
                if self.get(*field, t).is_some() {
                    self.fields[*field as usize].push(VersionedEntry::tombstone(t));
                }
            }
        }
    }
}

fn replay(steps: &[(Timestamp, Op)]) -> (ChronoKv, Model) {
    let db = ChronoKv::new();
    let mut model = Model::new();
    for (t, op) in steps {
        match op {
            Op::Set { field, value } => {
                db.set(*t, "k", &field_name(*field), value.to_string()).unwrap()
            }
            Op::SetTtl { field, value, ttl } => db
                .set_with_ttl(*t, "k", &field_name(*field), value.to_string(), *ttl)
                .unwrap(),
            Op::Delete { field } => {
                db.delete(*t, "k", &field_name(*field)).unwrap();
            }
        }
        model.apply(*t, op);
    }
    (db, model)
}

proptest! {
    /// Point reads agree with the model at every time of interest
    #[test]
    fn prop_get_matches_model(steps in history_strategy()) {
        let (db, model) = replay(&steps);
        let end = steps.last().map_or(0, |(t, _)| *t) + 10;

        for t in -1..=end {
            for field in 0u8..3 {
                prop_assert_eq!(db.get(t, "k", &field_name(field)), model.get(field, t));
            }
        }
    }

    /// Scan lists exactly the fields with a visible value, sorted
    #[test]
    fn prop_scan_matches_model(steps in history_strategy(), t in 0i64..100) {
        let (db, model) = replay(&steps);

        let expected: Vec<String> = (0u8..3)
            .filter_map(|field| {
                model
                    .get(field, t)
                    .map(|value| format!("{}={}", field_name(field), value))
            })
            .collect();
        prop_assert_eq!(db.scan(t, "k"), expected);
    }

    /// History keeps every accepted write
    #[test]
    fn prop_history_is_complete(steps in history_strategy()) {
        let (db, model) = replay(&steps);

        for field in 0u8..3 {
            let mut expected = model.fields[field as usize].clone();
            expected.reverse();
            prop_assert_eq!(db.history("k", &field_name(field)), expected);
        }
    }
}
