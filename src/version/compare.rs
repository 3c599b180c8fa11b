//! Version string comparison with multi-segment pre-release ordering
//!
//! This is the leaf every other version operation stands on. The rules
//! differ from strict SemVer precedence in two deliberate ways: alphabetic
//! pre-release segments compare case-insensitively, and malformed input is
//! ordered instead of rejected (an empty string sorts below everything, an
//! unparseable core component counts as 0). Release history scraped from a
//! hosting provider contains tags humans typed; the comparator has to rank
//! them, not crash on them.

use std::cmp::Ordering;

/// Compare two version strings.
///
/// Build metadata (anything after `+`) is ignored. Core triples compare
/// component-wise as integers with missing components treated as 0. A
/// version with no pre-release tag sorts above one that has a tag on the
/// same triple. Pre-release tags compare segment-wise on `.`: numeric
/// segments compare as integers and sort below alphabetic segments;
/// alphabetic segments compare case-insensitively.
pub fn compare(a: &str, b: &str) -> Ordering {
  match (a.is_empty(), b.is_empty()) {
    (true, true) => return Ordering::Equal,
    (true, false) => return Ordering::Less,
    (false, true) => return Ordering::Greater,
    (false, false) => {}
  }

  let (core_a, pre_a) = split_version(a);
  let (core_b, pre_b) = split_version(b);

  let core_order = compare_core(core_a, core_b);
  if core_order != Ordering::Equal {
    return core_order;
  }

  match (pre_a, pre_b) {
    (None, None) => Ordering::Equal,
    // Stable sorts above any pre-release of the same triple
    (None, Some(_)) => Ordering::Greater,
    (Some(_), None) => Ordering::Less,
    (Some(ta), Some(tb)) => compare_prerelease(ta, tb),
  }
}

/// Split a version into its core part and optional pre-release tag.
///
/// Build metadata is stripped first, then the tag is everything after the
/// first `-`.
fn split_version(version: &str) -> (&str, Option<&str>) {
  let without_meta = version.split('+').next().unwrap_or(version);
  match without_meta.split_once('-') {
    Some((core, tag)) => (core, Some(tag)),
    None => (without_meta, None),
  }
}

/// Compare dotted core components as integers, missing or unparseable
/// components count as 0.
fn compare_core(a: &str, b: &str) -> Ordering {
  let parts_a: Vec<u64> = a.split('.').map(|p| p.trim().parse().unwrap_or(0)).collect();
  let parts_b: Vec<u64> = b.split('.').map(|p| p.trim().parse().unwrap_or(0)).collect();

  let len = parts_a.len().max(parts_b.len());
  for i in 0..len {
    let x = parts_a.get(i).copied().unwrap_or(0);
    let y = parts_b.get(i).copied().unwrap_or(0);
    match x.cmp(&y) {
      Ordering::Equal => continue,
      other => return other,
    }
  }

  Ordering::Equal
}

/// Compare pre-release tags segment by segment.
///
/// A missing trailing segment is treated as empty and compared under the
/// same cascade as any other segment.
fn compare_prerelease(a: &str, b: &str) -> Ordering {
  let segs_a: Vec<&str> = a.split('.').collect();
  let segs_b: Vec<&str> = b.split('.').collect();

  let len = segs_a.len().max(segs_b.len());
  for i in 0..len {
    let x = segs_a.get(i).copied().unwrap_or("");
    let y = segs_b.get(i).copied().unwrap_or("");
    match compare_segment(x, y) {
      Ordering::Equal => continue,
      other => return other,
    }
  }

  Ordering::Equal
}

/// Compare a single pre-release segment pair: numeric < alphabetic,
/// numeric pairs compare as integers, everything else case-insensitively.
fn compare_segment(a: &str, b: &str) -> Ordering {
  match (a.parse::<u64>(), b.parse::<u64>()) {
    (Ok(x), Ok(y)) => x.cmp(&y),
    (Ok(_), Err(_)) => Ordering::Less,
    (Err(_), Ok(_)) => Ordering::Greater,
    (Err(_), Err(_)) => a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase()),
  }
}
