use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use semver::Version as SemVer;
use software_version::Version;
use software_version_tokenizer::{tokenize, Token};
use std::cmp::Ordering;

const INPUT_S: &str = "1.0.0";
const INPUT_XL: &str = "1:2.3.4-beta~rc2+el6_7.x86_64";
pub const INPUTS: [&str; 2] = [INPUT_S, INPUT_XL];

/// Pairs that every comparator in here orders the same way.
pub const PAIRS: [(&str, &str); 3] = [
    ("1.0.0", "1.0.1"),
    ("1.10.5", "1.9.12"),
    ("2.4.1-2", "2.4.1-10"),
];

const WORDS: [&str; 8] = ["alpha", "beta", "rc", "a", "b", "el7", "noarch", "git"];
const SEPARATORS: [&str; 5] = ["-", "~", "+", "_", "."];

/// Generates `count` version strings from a fixed seed.
pub fn generate(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| generate_one(&mut rng)).collect()
}

fn generate_one(rng: &mut StdRng) -> String {
    let mut version = String::with_capacity(24);
    if rng.gen_bool(0.1) {
        version.push_str(&rng.gen_range(0..4).to_string());
        version.push(':');
    }

    let parts = rng.gen_range(1..=4);
    for i in 0..parts {
        if i > 0 {
            version.push('.');
        }
        version.push_str(&rng.gen_range(0..20).to_string());
    }

    if rng.gen_bool(0.3) {
        if let (Some(sep), Some(word)) = (SEPARATORS.choose(rng), WORDS.choose(rng)) {
            version.push_str(sep);
            version.push_str(word);
        }
        if rng.gen_bool(0.5) {
            version.push_str(&rng.gen_range(1..5).to_string());
        }
    }

    if rng.gen_bool(0.05) {
        version.push('^');
    }

    version
}

pub fn mega_input() -> Vec<String> {
    generate(20_000, 42)
}

#[inline(always)]
pub fn software_version_tokens(input: &str) -> Vec<Token> {
    tokenize(input)
}

#[inline(always)]
pub fn software_version_compare((left, right): (&str, &str)) -> Ordering {
    software_version::compare(left, right)
}

#[inline(always)]
pub fn version_compare((left, right): (&str, &str)) -> Ordering {
    version_compare::compare(left, right)
        .ok()
        .and_then(|cmp| cmp.ord())
        .unwrap()
}

#[inline(always)]
pub fn semver((left, right): (&str, &str)) -> Ordering {
    SemVer::parse(left).unwrap().cmp(&SemVer::parse(right).unwrap())
}

/// Sorts fresh versions, every comparison after the first one per version hits the cache.
#[inline(always)]
pub fn sort_versions(inputs: &[String]) -> Vec<Version> {
    let mut versions = inputs.iter().map(Version::from).collect::<Vec<_>>();
    versions.sort();
    versions
}

/// Sorts the raw strings, tokenizing both sides on every comparison.
#[inline(always)]
pub fn sort_uncached(inputs: &[String]) -> Vec<&str> {
    let mut versions = inputs.iter().map(String::as_str).collect::<Vec<_>>();
    versions.sort_by(|l, r| software_version::compare(l, r));
    versions
}

#[inline(always)]
pub fn sort_version_compare(inputs: &[String]) -> Vec<&str> {
    let mut versions = inputs.iter().map(String::as_str).collect::<Vec<_>>();
    versions.sort_by(|l, r| {
        version_compare::compare(l, r)
            .ok()
            .and_then(|cmp| cmp.ord())
            .unwrap_or(Ordering::Equal)
    });
    versions
}
