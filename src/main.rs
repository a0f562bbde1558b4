use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use structopt::StructOpt;

use tst_tools::generate::{random_words, sequential_words, similar_words};
use tst_tools::wordlist::tst::TernarySearchTree;
use tst_tools::wordlist::wordlist::{FileFormat, Wordlist};

/// Ternary-search-tree wordlist tools.
#[derive(StructOpt)]
enum Cli {
    /// Load a wordlist file and look up a single word or prefix.
    Search {
        /// The path to the wordlist file to read
        #[structopt(parse(from_os_str))]
        path: PathBuf,
        word: String,
        /// Require a full-word match instead of a prefix match
        #[structopt(long)]
        exact: bool,
    },
    /// Load a wordlist file and dump the stored words as JSON.
    Words {
        #[structopt(parse(from_os_str))]
        path: PathBuf,
        #[structopt(parse(from_os_str))]
        out: PathBuf,
    },
    /// Time inserts and searches against built-in structures and write a
    /// plain-text report.
    Bench {
        #[structopt(long, use_delimiter = true, default_value = "100,500,1000,2000,5000,10000")]
        sizes: Vec<usize>,
        #[structopt(long, parse(from_os_str), default_value = "tst_performance_report.txt")]
        report: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::from_args() {
        Cli::Search { path, word, exact } => search(path, &word, exact),
        Cli::Words { path, out } => words(path, out),
        Cli::Bench { sizes, report } => bench(&sizes, report),
    }
}

fn search(path: PathBuf, word: &str, exact: bool) -> Result<()> {
    let wl = Wordlist::from_file(path, FileFormat::builder().build())?;

    let start = Instant::now();
    let found = if exact {
        wl.contains(word)
    } else {
        wl.contains_prefix(word)
    };
    println!(
        "{:?}: {} in {:#?}s",
        word,
        if found { "found" } else { "not found" },
        start.elapsed().as_millis() as f64 / 1000.0
    );
    Ok(())
}

fn words(path: PathBuf, out: PathBuf) -> Result<()> {
    let wl = Wordlist::from_file(path, FileFormat::builder().build())?;
    wl.save_words(&out)?;
    println!("Wrote {} words to {:#?}", wl.len(), out);
    Ok(())
}

fn seconds<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_secs_f64())
}

fn build_tree(words: &[String]) -> TernarySearchTree {
    let mut tst = TernarySearchTree::new();
    for word in words {
        tst.insert(word);
    }
    tst
}

fn bench(sizes: &[usize], report_path: PathBuf) -> Result<()> {
    let mut report = Vec::new();
    report.push("TERNARY SEARCH TREE PERFORMANCE REPORT".to_string());
    report.push(String::new());

    report.push("INSERT / SEARCH SCALING:".to_string());
    for &count in sizes {
        let words = random_words(count, 3, 10);
        let (tst, insert_time) = seconds(|| build_tree(&words));
        let (_, search_time) = seconds(|| {
            for word in &words {
                tst.search(word, true);
            }
        });
        let line = format!(
            "  {:6} words: insert {:.4}s ({:.0} words/sec), search {:.4}s, height {}",
            words.len(),
            insert_time,
            words.len() as f64 / insert_time.max(f64::EPSILON),
            search_time,
            tst.height()
        );
        println!("{}", line);
        report.push(line);
    }
    report.push(String::new());

    report.push("WORST CASE INSERTION ORDERS:".to_string());
    let mut reverse_sorted = random_words(1000, 3, 10);
    reverse_sorted.sort();
    reverse_sorted.reverse();
    let scenarios = [
        ("sequential", sequential_words(1000)),
        ("similar prefixes", similar_words(1000, "commonprefix")),
        ("reverse sorted", reverse_sorted),
    ];
    for (name, words) in &scenarios {
        let (tst, insert_time) = seconds(|| build_tree(words));
        let (_, search_time) = seconds(|| {
            for word in words.iter().take(100) {
                tst.search(word, true);
            }
        });
        let line = format!(
            "  {:17}: insert {:.4}s, search {:.4}s, height {}",
            name,
            insert_time,
            search_time,
            tst.height()
        );
        println!("{}", line);
        report.push(line);
    }
    report.push(String::new());

    report.push("COMPARISON WITH BUILT-IN STRUCTURES (5000 words):".to_string());
    let words = random_words(5000, 3, 10);

    let (tst, tst_insert) = seconds(|| build_tree(&words));
    let (_, tst_search) = seconds(|| {
        for word in &words {
            tst.search(word, true);
        }
    });

    let (set, set_insert) = seconds(|| words.iter().cloned().collect::<HashSet<String>>());
    let (_, set_search) = seconds(|| {
        for word in &words {
            set.contains(word);
        }
    });

    let (list, list_insert) = seconds(|| {
        let mut list: Vec<String> = Vec::new();
        for word in &words {
            if !list.contains(word) {
                list.push(word.clone());
            }
        }
        list
    });
    let (_, list_search) = seconds(|| {
        for word in &words {
            list.contains(word);
        }
    });

    for (name, insert_time, search_time) in [
        ("TST ", tst_insert, tst_search),
        ("Set ", set_insert, set_search),
        ("List", list_insert, list_search),
    ] {
        let line = format!(
            "  {} - insert: {:.4}s, search: {:.4}s",
            name, insert_time, search_time
        );
        println!("{}", line);
        report.push(line);
    }

    std::fs::write(&report_path, report.join("\n"))?;
    println!("Saved report to {:#?}", report_path);
    Ok(())
}
