use billing_ledger::dispatch::{self, Invocation};
use billing_ledger::{ArgumentError, Ledger, LedgerError, MemoryStore};
use speculate2::speculate;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn session() -> Vec<Invocation> {
    vec![
        Invocation::new("init", ["seed"]),
        Invocation::new("resourcetimeentry", ["Proj1", "Design", "Chandra", "10", "travel"]),
        Invocation::new("resourcetimeentry", ["Proj1", "Build", "Sanjay", "5", "labor"]),
        Invocation::new("completeprojectmilestone", ["Proj1", "M1", "Sanjay", "500"]),
        Invocation::new("resourcetimeentry", ["Proj2", "Review", "chandra", "2", "travel"]),
    ]
}

speculate! {
    before {
        let store = MemoryStore::new();
        let ledger = Ledger::new(store.clone());
    }

    describe "invoke" {
        it "runs the seed and time-entry scenario" {
            dispatch::invoke(&ledger, "init", &args(&["seed"])).expect("init failed");
            let result = dispatch::invoke(
                &ledger,
                "resourcetimeentry",
                &args(&["Proj1", "Design", "Chandra", "10", "travel"]),
            ).expect("resourcetimeentry failed");
            assert!(result.is_none());

            let entries = ledger.time_entries("Proj1", "Chandra").unwrap();
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].derived_amount, "1100");
            assert_eq!(entries[0].expense_type, "travel");
            assert_eq!(ledger.active_users("Proj1").unwrap().members(), ["Chandra"]);
        }

        it "records milestones" {
            dispatch::invoke(&ledger, "completeprojectmilestone", &args(&["Proj1", "M1", "Sanjay", "500"]))
                .expect("completeprojectmilestone failed");
            assert_eq!(ledger.milestones("Proj1").unwrap()[0].amount, "500");
        }

        it "rejects unknown functions by name" {
            let err = dispatch::invoke(&ledger, "bogus", &[]).unwrap_err();
            assert!(matches!(err, LedgerError::UnknownFunction(ref name) if name == "bogus"));
            assert!(err.to_string().contains("bogus"));
        }

        it "does not serve reads" {
            let err = dispatch::invoke(&ledger, "read", &args(&["test"])).unwrap_err();
            assert!(matches!(err, LedgerError::UnknownFunction(ref name) if name == "read"));
        }

        it "names the empty milestone amount" {
            let err = dispatch::invoke(
                &ledger,
                "completeprojectmilestone",
                &args(&["Proj1", "M1", "Sanjay", ""]),
            ).unwrap_err();

            assert!(matches!(
                err,
                LedgerError::Argument(ArgumentError::Empty { position: 4, field: "Amount" })
            ));
            assert!(ledger.milestones("Proj1").unwrap().is_empty());
        }

        it "checks time-entry arity before anything is written" {
            let err = dispatch::invoke(&ledger, "resourcetimeentry", &args(&["Proj1", "Design", "Chandra", "10"]))
                .unwrap_err();
            assert!(matches!(
                err,
                LedgerError::Argument(ArgumentError::Count { expected: 5, actual: 4 })
            ));
            assert!(store.is_empty());
        }

        it "names each empty time-entry field" {
            let full = ["Proj1", "Design", "Chandra", "10", "travel"];
            let fields = ["ProjectName", "TaskName", "PersonName", "QuantityInHours", "ExpenseType"];

            for blank in 0..full.len() {
                let mut values = args(&full);
                values[blank].clear();

                let err = dispatch::invoke(&ledger, "resourcetimeentry", &values).unwrap_err();
                match err {
                    LedgerError::Argument(ArgumentError::Empty { position, field }) => {
                        assert_eq!(position, blank + 1);
                        assert_eq!(field, fields[blank]);
                    }
                    other => panic!("unexpected error: {}", other),
                }
            }
            assert!(store.is_empty());
        }
    }

    describe "query" {
        it "reads raw bytes" {
            dispatch::invoke(&ledger, "init", &args(&["seed"])).unwrap();

            let bytes = dispatch::query(&ledger, "read", &args(&["Proj1"])).unwrap();
            assert_eq!(
                bytes,
                Some(br#"[{"user":"Chandra","rate":"110"},{"user":"Sudheer","rate":"100"},{"user":"Sanjay","rate":"80"}]"#.to_vec())
            );
        }

        it "requires exactly one key" {
            let err = dispatch::query(&ledger, "read", &[]).unwrap_err();
            assert!(matches!(err, LedgerError::Argument(ArgumentError::Count { expected: 1, actual: 0 })));
        }

        it "reports missing keys as not found" {
            let err = dispatch::query(&ledger, "read", &args(&["Proj1::Nobody"])).unwrap_err();
            assert!(matches!(err, LedgerError::NotFound(_)));
        }

        it "does not serve mutations" {
            let err = dispatch::query(&ledger, "init", &args(&["seed"])).unwrap_err();
            assert!(matches!(err, LedgerError::UnknownQuery(ref name) if name == "init"));
            assert!(store.is_empty());
        }

        it "words unknown names for the query path" {
            let err = dispatch::query(&ledger, "bogus", &[]).unwrap_err();
            assert!(matches!(err, LedgerError::UnknownQuery(ref name) if name == "bogus"));
            assert_eq!(err.to_string(), "Received unknown function query: bogus");
        }
    }

    describe "replay" {
        it "reports one outcome per invocation and keeps going after failures" {
            let mut invocations = session();
            invocations.insert(1, Invocation::new("bogus", Vec::<String>::new()));

            let outcomes = dispatch::replay(&ledger, &invocations);
            assert_eq!(outcomes.len(), invocations.len());
            assert!(outcomes[1].is_err());
            assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), invocations.len() - 1);
            assert_eq!(ledger.time_entries("Proj1", "Sanjay").unwrap()[0].derived_amount, "400");
        }

        it "produces identical state on every replay" {
            let other = MemoryStore::new();
            let other_ledger = Ledger::new(other.clone());

            dispatch::replay(&ledger, &session());
            dispatch::replay(&other_ledger, &session());

            assert_eq!(store.snapshot(), other.snapshot());
        }

        it "derives amounts from each project's table" {
            dispatch::replay(&ledger, &session());

            let entries = ledger.time_entries("Proj2", "chandra").unwrap();
            assert_eq!(entries[0].derived_amount, "210");
            assert_eq!(ledger.active_users("Proj2").unwrap().members(), ["chandra"]);
        }
    }
}
