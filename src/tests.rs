//! Behaviour of [`crate::Version`] as seen by users of the crate.
//! Some of these are replicated in the crate documentation as doc tests.

mod ordering_test {
    use crate::Version;
    use test_case::test_case;

    fn versions() -> [Version; 5] {
        [
            Version::new("1.0.0"),
            Version::new("1.5.5"),
            Version::new("1.4.8"),
            Version::new("1.10.5"),
            Version::new("1.10"),
        ]
    }

    #[test]
    fn test_sort() {
        let mut list = versions().to_vec();
        list.sort();

        let sorted = list.iter().map(Version::as_str).collect::<Vec<_>>();
        assert_eq!(sorted, vec!["1.0.0", "1.4.8", "1.5.5", "1.10", "1.10.5"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_versions() {
        let mut list = vec![
            Version::new("1.0"),
            Version::new("0.9"),
            Version::new("1"),
            Version::new("1.0.0"),
        ];
        list.sort();

        let sorted = list.iter().map(Version::as_str).collect::<Vec<_>>();
        assert_eq!(sorted, vec!["0.9", "1.0", "1", "1.0.0"]);
    }

    #[test_case("1.0.0", "1.5.5")]
    #[test_case("1.4.8", "1.5.5")]
    #[test_case("1.0.0", "1.10.5")]
    #[test_case("1.0.0", "1.10")]
    #[test_case("1.5.5", "1.10.5")]
    #[test_case("1.4.8", "1.10.5")]
    #[test_case("1.10", "1.10.5")]
    #[test_case("1.1-1-3", "1.1-2")]
    #[test_case("1.0alpha", "1.0")]
    #[test_case("1.0b2", "1.0")]
    #[test_case("2", "1:1")]
    #[test_case("6.0.99999", "6.0.^")]
    #[test_case("6.0.^", "6.1")]
    #[test_case("", "1.0.0"; "empty version")]
    #[test_case("2.4.1-2.el6", "2.4.1-2.el6_7"; "distribution subversion")]
    #[test_case("52.0a2", "52.0"; "firefox aurora")]
    #[test_case("52b", "52c"; "letter releases")]
    #[test_case("1.0~rc1", "1.0"; "debian tilde")]
    #[test_case("3.2.0", "3.2.0-1"; "debian revision")]
    fn test_lt(left: &str, right: &str) {
        let (left, right) = (Version::new(left), Version::new(right));
        assert!(left < right, "{} < {} was violated", left, right);
        assert!(right > left, "{} > {} was violated", right, left);
        assert_ne!(left, right);
    }

    #[test_case("1.0.0", "1.0.0")]
    #[test_case("1.0.0", "1.0")]
    #[test_case("1.0.0", "1.00")]
    #[test_case("1.0.0", "1")]
    #[test_case("1.5.5", "1.5.5")]
    #[test_case("1.4.8", "1.4.8")]
    #[test_case("1.10.5", "1.10.5")]
    #[test_case("1.0.0.beta", "1.0beta")]
    #[test_case("1.1", "1u1")]
    #[test_case("", "0"; "empty and zero")]
    fn test_eq(left: &str, right: &str) {
        let (left, right) = (Version::new(left), Version::new(right));
        assert_eq!(left, right);
        assert_eq!(right, left);
        assert_eq!(left.cmp(&right), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_epoch_is_not_implied() {
        assert_ne!(Version::new("1:0"), Version::new("0"));
        assert_ne!(Version::new("0:1"), Version::new("1"));
        assert!(Version::new("0:1") > Version::new("1"));
    }

    #[test]
    fn test_total_order() {
        let inputs = [
            "", "0", "1", "1.0", "1.0.0", "1.0alpha", "1.0a1", "1.0beta", "1.0rc1", "1~1", "1-1",
            "1+1", "1g", "1.1", "1:0", "1:1", "6.0.^", "6.^", "17^2", "el6_7", "KB.16.10.0012",
            "19.1R2-S8", "1.1-1-3", "1.1-2",
        ];
        let versions = inputs.iter().map(|v| Version::new(*v)).collect::<Vec<_>>();

        for a in &versions {
            assert_eq!(a.cmp(a), std::cmp::Ordering::Equal, "{} is not equal to itself", a);
            for b in &versions {
                assert_eq!(a.cmp(b), b.cmp(a).reverse(), "{} and {} are not antisymmetric", a, b);
                for c in &versions {
                    if a <= b && b <= c {
                        assert!(a <= c, "{} <= {} <= {} is not transitive", a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_compare_with_raw_strings() {
        let version = Version::new("1.10");

        assert!(version == "1.10.0");
        assert!("1.10.0" == version);
        assert!(version == *"1.10");
        assert!(version == String::from("1.10"));
        assert!(String::from("1.10") == version);

        assert!(version > "1.9");
        assert!("1.9" < version);
        assert!(version < String::from("1.10.1"));
        assert!(String::from("1.10.1") > version);
    }

    #[test]
    fn test_compare_fn() {
        assert_eq!(crate::compare("1.0.0", "1"), std::cmp::Ordering::Equal);
        assert_eq!(crate::compare("1:1", "2"), std::cmp::Ordering::Greater);
        assert_eq!(crate::compare("1.0alpha", "1.0"), std::cmp::Ordering::Less);
    }
}

mod accessors_test {
    use crate::Version;
    use test_case::test_case;

    #[test_case("" => 0; "empty")]
    #[test_case("1.0" => 0)]
    #[test_case("1:1.0" => 1)]
    #[test_case("12:1.0" => 12)]
    #[test_case("0:1.0" => 0; "explicit zero")]
    #[test_case("1.0:1" => 0; "not leading")]
    fn test_epoch(input: &str) -> u64 {
        Version::new(input).epoch()
    }

    #[test]
    fn test_accessors_of_nothing() {
        let none = Version::from(None::<&str>);
        assert_eq!((none.major(), none.minor(), none.patch()), (0, 0, 0));
        assert_eq!(none.epoch(), 0);
    }

    #[test_case("" => (0, 0, 0); "empty")]
    #[test_case("11" => (11, 0, 0))]
    #[test_case("11.0.0" => (11, 0, 0))]
    #[test_case("11.22.33" => (11, 22, 33))]
    #[test_case("0.1" => (0, 1, 0))]
    #[test_case("0.0.1.0" => (0, 0, 1))]
    #[test_case("19.1R2-S8" => (19, 1, 2))]
    #[test_case("KB.16.10.0012" => (16, 10, 12))]
    #[test_case("2:4.5" => (4, 5, 0); "with epoch")]
    #[test_case("v1.2.3" => (1, 2, 3); "leading v")]
    #[test_case("1.2beta3" => (1, 2, 0); "stops at pre version")]
    fn test_major_minor_patch(input: &str) -> (u64, u64, u64) {
        let version = Version::new(input);
        (version.major(), version.minor(), version.patch())
    }

    #[test]
    fn test_numbers_are_cached() {
        let version = Version::new("1.2.3");
        let first = version.numbers().as_ptr();
        let second = version.numbers().as_ptr();
        assert_eq!(first, second);
        assert_eq!(version.tokens().as_ptr(), version.tokens().as_ptr());
    }

    #[test]
    fn test_clone_keeps_cache_consistent() {
        let version = Version::new("3.4.5");
        assert_eq!(version.minor(), 4);
        let cloned = version.clone();
        assert_eq!(cloned.minor(), 4);
        assert_eq!(cloned, version);
    }

    #[test]
    fn test_concurrent_first_use() {
        let version = std::sync::Arc::new(Version::new("1:2.3.4-beta~rc2"));
        let handles = (0..8)
            .map(|_| {
                let version = std::sync::Arc::clone(&version);
                std::thread::spawn(move || (version.epoch(), version.numbers().to_vec()))
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), (1, vec![2, 3, 4]));
        }
    }

    #[test_case("1.0beta" => true)]
    #[test_case("1.0rc1" => true)]
    #[test_case("1.0b1" => true)]
    #[test_case("1.0b" => false)]
    #[test_case("1.0" => false)]
    fn test_is_pre_release(input: &str) -> bool {
        Version::new(input).is_pre_release()
    }
}

mod coercion_test {
    use crate::{as_version, Version};

    #[test]
    fn test_nil_version() {
        assert_eq!(Version::from(None::<&str>).to_string(), "");
        assert_eq!(Version::from(None::<String>).as_str(), "");
        assert_eq!(Version::from(Some("1.0")).as_str(), "1.0");
    }

    #[test]
    fn test_empty_version() {
        assert_eq!(Version::new("").to_string(), "");
        assert_eq!(Version::empty().to_string(), "");
        assert_eq!(Version::default(), Version::empty());
    }

    #[test]
    fn test_nil_and_empty_sort_first() {
        let version = Version::new("1.0.0");
        assert!(Version::from(None::<&str>) < version);
        assert!(version > Version::from(None::<&str>));
        assert!(Version::new("") < version);
        assert!(version > Version::new(""));
    }

    #[test]
    fn test_as_version() {
        let version = Version::new("1.0");
        assert_eq!(as_version("1.0"), version);
        assert_eq!(as_version(String::from("1.0")), version);
        assert_eq!(as_version(&version), version);
        assert_eq!(as_version(version.clone()).as_str(), "1.0");
        assert_eq!(as_version(1u8), Version::new("1"));
        assert_eq!(as_version(-3i64).as_str(), "-3");
    }

    #[test]
    fn test_from_str() {
        let version = "1:2.3".parse::<Version>().unwrap();
        assert_eq!(version.epoch(), 1);
    }

    #[test]
    fn test_round_trip() {
        for input in ["", "1.0.0", "1:2.3.4-beta~rc2", "  v1.2  ", "KB.16.10.0012", "6.0.^", "ÄÖÜ 1"] {
            let version = Version::new(input);
            assert_eq!(version.to_string(), input);
            assert_eq!(version.as_str(), input);
            assert_eq!(&*version, input);
            assert_eq!(version.into_string(), input);
        }
    }

    #[test]
    fn test_display() {
        let version = Version::new("1.2.3-beta");
        assert_eq!(format!("{:>12}", version), "  1.2.3-beta");
        assert_eq!(format!("{:*<12}", version), "1.2.3-beta**");
        assert_eq!(format!("{:.5}", version), "1.2.3");
        assert_eq!(format!("{:?}", version), r#"Version("1.2.3-beta")"#);
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::HashSet;

        let set = ["1", "1.0", "1.0.0", "1.00", "2", "1:1"]
            .iter()
            .map(|v| Version::new(*v))
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Version::new("1.0.0.0")));
    }
}

#[cfg(feature = "serde")]
mod serde_test {
    use crate::Version;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, Serialize)]
    struct Package {
        name: String,
        version: Version,
    }

    #[test]
    fn test_serialize_raw() {
        let package = Package {
            name: String::from("openssl"),
            version: Version::new("1:1.0.2k-19.el7"),
        };
        assert_eq!(
            serde_json::to_string(&package).unwrap(),
            r#"{"name":"openssl","version":"1:1.0.2k-19.el7"}"#
        );
    }

    #[test]
    fn test_deserialize_string() {
        let package = serde_json::from_str::<Package>(r#"{"name":"openssl","version":"1:1.0.2k-19.el7"}"#).unwrap();
        assert_eq!(package.version.as_str(), "1:1.0.2k-19.el7");
        assert_eq!(package.version.epoch(), 1);
    }

    #[test]
    fn test_deserialize_numbers() {
        assert_eq!(serde_json::from_str::<Version>("42").unwrap().as_str(), "42");
        assert_eq!(serde_json::from_str::<Version>("-1").unwrap().as_str(), "-1");
        assert_eq!(serde_json::from_str::<Version>("1.5").unwrap(), Version::new("1.5"));
    }

    #[test]
    fn test_deserialize_null() {
        let version = serde_json::from_str::<Version>("null").unwrap();
        assert_eq!(version.as_str(), "");
        assert_eq!(version, Version::empty());
    }

    #[test]
    fn test_deserialize_type_mismatch() {
        let error = serde_json::from_str::<Version>(r#"["1.0"]"#).unwrap_err();
        assert!(error.is_data());
        assert!(
            error.to_string().contains("expected a version string or number"),
            "{}",
            error
        );

        let error = serde_json::from_str::<Version>("true").unwrap_err();
        assert!(error.to_string().starts_with("invalid type: boolean `true`"), "{}", error);
    }
}

#[cfg(feature = "semver")]
mod semver_test {
    use crate::Version;
    use test_case::test_case;

    #[test_case("1.2.3" => semver::Version::new(1, 2, 3))]
    #[test_case("1:2.3" => semver::Version::new(2, 3, 0))]
    #[test_case("v4" => semver::Version::new(4, 0, 0))]
    #[test_case("" => semver::Version::new(0, 0, 0); "empty")]
    fn test_to_semver(input: &str) -> semver::Version {
        Version::new(input).to_semver()
    }

    #[test]
    fn test_agrees_with_semver_on_release_versions() {
        let inputs = ["0.0.1", "0.1.0", "1.0.0", "1.0.1", "1.2.0", "1.10.0", "2.0.0", "10.0.0"];
        for left in &inputs {
            for right in &inputs {
                let expected = semver::Version::parse(left).unwrap().cmp(&semver::Version::parse(right).unwrap());
                assert_eq!(crate::compare(left, right), expected, "{} <=> {}", left, right);
            }
        }
    }

    #[test]
    fn test_from_semver() {
        let semver = semver::Version::parse("1.2.3-rc.1").unwrap();
        let version = Version::from(&semver);
        assert_eq!(version.as_str(), "1.2.3-rc.1");
        assert!(version.is_pre_release());
        assert_eq!(Version::from(semver), version);
    }
}
