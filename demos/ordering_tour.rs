//! Example: a tour of composable orderings
//!
//! Walks through the same running example the crate is built around:
//! integers, then sequences, then tuples, in both the three-way and the
//! less-or-equal conventions.

use std::cmp::Ordering;

use cim_ordering::laws::LawChecker;
use cim_ordering::less_or_equal;
use cim_ordering::three_way::{self, ByKey, IntegerComparator, Tuple3Comparator};
use cim_ordering::{sign, Comparable, Comparator, LawCheckConfig, OrderingResult};

#[derive(Debug)]
struct Release {
    name: &'static str,
    version: (u32, u32, u32),
}

fn show<T: std::fmt::Debug>(x: &T, y: &T, ordering: Ordering, le: bool) {
    println!(
        "  compare({:?}, {:?}) = {:>2}    le = {}",
        x,
        y,
        sign(ordering),
        le
    );
}

fn main() -> OrderingResult<()> {
    println!("=== Integers ===");
    show(&-5, &10, three_way::compare(&-5, &10), less_or_equal::le(&-5, &10));

    println!("\n=== Sequences ===");
    let pairs = [(vec![1, 2, 3], vec![1, 5, 2]), (vec![1, 2, 4], vec![1, 2, 3])];
    for (x, y) in &pairs {
        show(x, y, three_way::compare(x, y), less_or_equal::le(x, y));
    }
    let x = vec!["a", "b", "z"];
    let y = vec!["a", "b", "c", "d"];
    show(&x, &y, three_way::compare(&x, &y), less_or_equal::le(&x, &y));
    println!("  max = {:?}", three_way::max(&x, &y));

    println!("\n=== Sequences of tuples ===");
    let x = vec![("a", 5, vec!["x", "y"]), ("b", 11, vec!["p", "q"])];
    let y = vec![("a", 5, vec!["x", "y"]), ("b", 11, vec!["p"])];
    show(&x, &y, three_way::compare(&x, &y), less_or_equal::le(&x, &y));

    println!("\n=== User-defined types ===");
    let by_version = ByKey::new(
        |r: &Release| r.version,
        Tuple3Comparator::new(IntegerComparator, IntegerComparator, IntegerComparator),
    );
    let stable = Release {
        name: "stable",
        version: (1, 4, 2),
    };
    let beta = Release {
        name: "beta",
        version: (1, 5, 0),
    };
    let newest = three_way::max_by(&by_version, &stable, &beta);
    println!("  newest of {} and {} is {}", stable.name, beta.name, newest.name);
    println!("  ordering = {:?}", by_version.compare(&stable, &beta));

    println!("\n=== Law check ===");
    let config = LawCheckConfig::from_json_str(r#"{ "max_samples": 64 }"#)?;
    let checker = LawChecker::new(config)?;
    let samples: Vec<Vec<(&str, i32, Vec<&str>)>> = vec![x, y, vec![], vec![("a", 5, vec![])]];
    let report = checker.check_comparator(&<Vec<(&str, i32, Vec<&str>)>>::comparator(), &samples)?;
    println!("  {:?} held over {} pairs", report.laws, report.pairs);

    Ok(())
}
